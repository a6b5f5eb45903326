//! Everything decoded during one extraction run.

use crate::directory::{Directory, DirectoryKind};

/// The directories produced during one extraction run, in the order they
/// were added.
///
/// Directories are never removed or merged: two readers producing the same
/// kind of directory leave two directories behind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    directories: Vec<Directory>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory(&mut self, directory: Directory) {
        log::debug!(
            "Adding `{}` directory with `{}` tags.",
            directory.name(),
            directory.tag_count()
        );
        self.directories.push(directory);
    }

    /// Finds the earliest-added directory of the given kind.
    pub fn first_of_kind(&self, kind: DirectoryKind) -> Option<&Directory> {
        self.directories.iter().find(|d| d.kind() == kind)
    }

    /// Every directory of the given kind, oldest first.
    pub fn directories_of_kind(&self, kind: DirectoryKind) -> impl Iterator<Item = &Directory> {
        self.directories.iter().filter(move |d| d.kind() == kind)
    }

    pub fn contains_kind(&self, kind: DirectoryKind) -> bool {
        self.first_of_kind(kind).is_some()
    }

    /// Resolves a directory's parent to the first directory of that kind.
    pub fn parent_of(&self, directory: &Directory) -> Option<&Directory> {
        directory
            .parent()
            .and_then(|parent| self.first_of_kind(parent))
    }

    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Whether any directory noted a problem while it was decoded.
    pub fn has_errors(&self) -> bool {
        self.directories.iter().any(Directory::has_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::Metadata;
    use crate::{
        directory::{Directory, DirectoryKind},
        util::logger,
    };

    const OUTER: DirectoryKind = DirectoryKind::Custom("Outer");
    const INNER: DirectoryKind = DirectoryKind::Custom("Inner");

    fn directory(kind: DirectoryKind, marker: i32) -> Directory {
        let mut d = Directory::new(kind);
        d.set(1, marker);
        d
    }

    #[test]
    fn lookup_finds_the_first_match() {
        logger();

        let mut m = Metadata::new();
        assert!(m.is_empty());
        assert_eq!(m.first_of_kind(OUTER), None);

        m.add_directory(directory(INNER, 1));
        m.add_directory(directory(OUTER, 2));
        m.add_directory(directory(INNER, 3));

        assert_eq!(m.directory_count(), 3);
        assert_eq!(m.first_of_kind(INNER).map(|d| d.get_i32(1)), Some(Ok(1)));
        assert_eq!(m.first_of_kind(OUTER).map(|d| d.get_i32(1)), Some(Ok(2)));
        assert_eq!(
            m.directories_of_kind(INNER)
                .filter_map(|d| d.try_get_i32(1))
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(!m.contains_kind(DirectoryKind::PsdHeader));
    }

    #[test]
    fn parents_are_looked_up_by_kind() {
        logger();

        let mut m = Metadata::new();
        let mut inner = directory(INNER, 1);
        inner.set_parent(OUTER);

        // no parent exists yet
        assert_eq!(m.parent_of(&inner), None);

        m.add_directory(directory(OUTER, 2));
        m.add_directory(inner.clone());

        assert_eq!(m.parent_of(&inner).map(Directory::kind), Some(OUTER));
        assert_eq!(m.parent_of(&m.directories()[0]), None);
    }

    #[test]
    fn errors_bubble_up() {
        logger();

        let mut m = Metadata::new();
        m.add_directory(directory(OUTER, 1));
        assert!(!m.has_errors());

        let mut broken = directory(INNER, 2);
        broken.add_error("bad");
        m.add_directory(broken);
        assert!(m.has_errors());
    }
}
