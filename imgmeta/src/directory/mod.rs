//! Directories hold the tags decoded from one structural unit of a file.
//!
//! Values are stored exactly as the reader decoded them. Reading them back is
//! where the typing happens: ask for any tag as an `i32`, `f64`, `bool`,
//! `String`, or [`Rational`], and the stored value is converted by one fixed
//! set of rules (see the `convert` module).

use rustc_hash::FxHashMap;

use imgmeta_types::{Rational, TypedValue, psd::PsdHeaderTag};

use self::convert::{FromTypedValue, convert, convert_array};

pub use self::error::MetadataError;

mod convert;
pub mod error;

/// Which kind of structural unit a directory describes.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum DirectoryKind {
    /// The fixed header at the start of a Photoshop file.
    PsdHeader,

    /// A kind defined by a reader outside this crate, named by that reader.
    Custom(&'static str),
}

impl DirectoryKind {
    pub const fn name(self) -> &'static str {
        match self {
            DirectoryKind::PsdHeader => "PSD Header",
            DirectoryKind::Custom(name) => name,
        }
    }

    /// Looks up the human name of a tag in this kind of directory.
    pub fn tag_name(self, tag: i32) -> Option<&'static str> {
        match self {
            DirectoryKind::PsdHeader => PsdHeaderTag::try_from(tag).ok().map(PsdHeaderTag::name),
            DirectoryKind::Custom(_) => None,
        }
    }
}

/// One tag of a directory, as yielded by [`Directory::tags`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tag<'d> {
    pub id: i32,

    /// The tag's name, if the directory's kind knows it.
    pub name: Option<&'d str>,

    pub value: &'d TypedValue,
}

/// A typed key-value store for the tags of one structural unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Directory {
    kind: DirectoryKind,
    values: FxHashMap<i32, TypedValue>,

    /// Tag keys in the order they were first set.
    order: Vec<i32>,

    /// The kind of directory this one logically sits under. It's only a
    /// name - resolve it with [`crate::Metadata::parent_of`].
    parent: Option<DirectoryKind>,

    /// Problems that didn't stop decoding.
    errors: Vec<String>,
}

impl Directory {
    pub fn new(kind: DirectoryKind) -> Self {
        Self {
            kind,
            values: FxHashMap::default(),
            order: Vec::new(),
            parent: None,
            errors: Vec::new(),
        }
    }

    pub fn kind(&self) -> DirectoryKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Stores `value` under `tag`, replacing anything already there.
    ///
    /// A replaced tag keeps its original place in [`Directory::tags`].
    pub fn set(&mut self, tag: i32, value: impl Into<TypedValue>) {
        let value: TypedValue = value.into();
        log::trace!("{}: setting tag `{tag}` to `{value:?}`", self.name());

        if self.values.insert(tag, value).is_none() {
            self.order.push(tag);
        }
    }

    pub fn has(&self, tag: i32) -> bool {
        self.values.contains_key(&tag)
    }

    /// The stored value, exactly as it was set.
    pub fn value(&self, tag: i32) -> Option<&TypedValue> {
        self.values.get(&tag)
    }

    pub fn tag_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the stored tags in the order they were first set.
    pub fn tags(&self) -> impl Iterator<Item = Tag<'_>> + '_ {
        self.order.iter().filter_map(move |&id| {
            self.values.get(&id).map(|value| Tag {
                id,
                name: self.kind.tag_name(id),
                value,
            })
        })
    }

    /// The name of `tag`, or a placeholder with its hex id if it's unknown.
    pub fn tag_name(&self, tag: i32) -> String {
        self.kind
            .tag_name(tag)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Unknown tag ({tag:#06x})"))
    }

    pub fn parent(&self) -> Option<DirectoryKind> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: DirectoryKind) {
        self.parent = Some(parent);
    }

    /// Notes a problem found while decoding this directory.
    pub fn add_error(&mut self, message: impl Into<String>) {
        let message: String = message.into();
        log::warn!("{}: {message}", self.name());
        self.errors.push(message);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get_i32(&self, tag: i32) -> Result<i32, MetadataError> {
        self.get(tag)
    }

    pub fn get_i64(&self, tag: i32) -> Result<i64, MetadataError> {
        self.get(tag)
    }

    pub fn get_f32(&self, tag: i32) -> Result<f32, MetadataError> {
        self.get(tag)
    }

    pub fn get_f64(&self, tag: i32) -> Result<f64, MetadataError> {
        self.get(tag)
    }

    /// Text only converts if it's `true` or `false` (in any case). Numbers
    /// are `false` when zero.
    pub fn get_bool(&self, tag: i32) -> Result<bool, MetadataError> {
        self.get(tag)
    }

    pub fn get_string(&self, tag: i32) -> Result<String, MetadataError> {
        self.get(tag)
    }

    pub fn get_rational(&self, tag: i32) -> Result<Rational, MetadataError> {
        self.get(tag)
    }

    pub fn try_get_i32(&self, tag: i32) -> Option<i32> {
        self.get_i32(tag).ok()
    }

    pub fn try_get_i64(&self, tag: i32) -> Option<i64> {
        self.get_i64(tag).ok()
    }

    pub fn try_get_f32(&self, tag: i32) -> Option<f32> {
        self.get_f32(tag).ok()
    }

    pub fn try_get_f64(&self, tag: i32) -> Option<f64> {
        self.get_f64(tag).ok()
    }

    pub fn try_get_bool(&self, tag: i32) -> Option<bool> {
        self.get_bool(tag).ok()
    }

    pub fn try_get_string(&self, tag: i32) -> Option<String> {
        self.get_string(tag).ok()
    }

    pub fn try_get_rational(&self, tag: i32) -> Option<Rational> {
        self.get_rational(tag).ok()
    }

    pub fn get_i32_array(&self, tag: i32) -> Result<Vec<i32>, MetadataError> {
        self.get_array(tag)
    }

    pub fn get_string_array(&self, tag: i32) -> Result<Vec<String>, MetadataError> {
        self.get_array(tag)
    }

    pub fn get_rational_array(&self, tag: i32) -> Result<Vec<Rational>, MetadataError> {
        self.get_array(tag)
    }

    /// Reads a tag as raw bytes.
    ///
    /// Text gives its UTF-8 bytes. Numbers are narrowed to `u8`.
    pub fn get_bytes(&self, tag: i32) -> Result<Vec<u8>, MetadataError> {
        match self.value(tag) {
            Some(TypedValue::Text(s)) => Ok(s.as_bytes().to_vec()),
            _ => self.get_array(tag),
        }
    }

    fn get<T: FromTypedValue>(&self, tag: i32) -> Result<T, MetadataError> {
        let value = self.value(tag).ok_or_else(|| self.not_found(tag))?;
        convert(value).ok_or_else(|| self.conversion_failed(tag, value, T::NAME))
    }

    fn get_array<T: FromTypedValue>(&self, tag: i32) -> Result<Vec<T>, MetadataError> {
        let value = self.value(tag).ok_or_else(|| self.not_found(tag))?;
        convert_array(value).ok_or_else(|| self.conversion_failed(tag, value, T::NAME))
    }

    fn not_found(&self, tag: i32) -> MetadataError {
        MetadataError::TagNotFound {
            tag,
            directory: self.name(),
        }
    }

    fn conversion_failed(&self, tag: i32, value: &TypedValue, to: &'static str) -> MetadataError {
        let e = MetadataError::ConversionFailed {
            tag,
            directory: self.name(),
            from: value.kind_name(),
            to,
        };
        log::debug!("{e}");
        e
    }
}

#[cfg(test)]
mod tests {
    use imgmeta_types::{Rational, TypedValue, ValueArray, psd::PsdHeaderTag};

    use super::{Directory, DirectoryKind, MetadataError};
    use crate::util::logger;

    const TEST_KIND: DirectoryKind = DirectoryKind::Custom("Test");

    #[test]
    fn last_set_wins_but_order_is_first_set() {
        logger();

        let mut d = Directory::new(TEST_KIND);
        d.set(7, 1_u8);
        d.set(3, "three");
        d.set(7, 2_u8);

        assert_eq!(d.get_i32(7), Ok(2));
        assert_eq!(d.tag_count(), 2);
        assert_eq!(d.tags().map(|t| t.id).collect::<Vec<_>>(), vec![7, 3]);
    }

    #[test]
    fn missing_tags_are_never_defaulted() {
        logger();

        let mut d = Directory::new(TEST_KIND);
        d.set(1, 0_i32);

        let missing = MetadataError::TagNotFound {
            tag: 2,
            directory: "Test",
        };
        assert_eq!(d.get_i32(2), Err(missing.clone()));
        assert_eq!(d.get_bool(2), Err(missing.clone()));
        assert_eq!(d.get_string(2), Err(missing.clone()));
        assert_eq!(d.get_bytes(2), Err(missing));
        assert_eq!(d.try_get_rational(2), None);
        assert!(!d.has(2));
    }

    #[test]
    fn conversion_failures_name_both_types() {
        logger();

        let mut d = Directory::new(TEST_KIND);
        d.set(1, vec![1_i16, 2_i16]);
        d.set(2, "yes");

        assert_eq!(
            d.get_i64(1),
            Err(MetadataError::ConversionFailed {
                tag: 1,
                directory: "Test",
                from: "Array",
                to: "i64",
            })
        );
        assert_eq!(
            d.get_bool(2),
            Err(MetadataError::ConversionFailed {
                tag: 2,
                directory: "Test",
                from: "Text",
                to: "bool",
            })
        );
        assert_eq!(d.try_get_bool(2), None);
    }

    #[test]
    fn array_getters() {
        logger();

        let mut d = Directory::new(TEST_KIND);
        d.set(1, vec![Rational::new(1, 2), Rational::new(3, 4)]);
        d.set(2, "AB");
        d.set(3, 9_u32);
        d.set(4, TypedValue::Array(ValueArray::Int32(vec![1, -1])));

        assert_eq!(
            d.get_rational_array(1),
            Ok(vec![Rational::new(1, 2), Rational::new(3, 4)])
        );
        assert_eq!(
            d.get_string_array(1),
            Ok(vec![String::from("1/2"), String::from("3/4")])
        );
        assert_eq!(d.get_bytes(2), Ok(b"AB".to_vec()));
        assert_eq!(d.get_i32_array(3), Ok(vec![9]));
        assert_eq!(d.get_bytes(4), Ok(vec![1, 255]));
    }

    #[test]
    fn tag_names_come_from_the_kind() {
        logger();

        let mut psd = Directory::new(DirectoryKind::PsdHeader);
        psd.set(PsdHeaderTag::ImageWidth.id(), 8_u32);
        psd.set(0x99, 1_u8);

        assert_eq!(psd.name(), "PSD Header");
        assert_eq!(psd.tag_name(PsdHeaderTag::ImageWidth.id()), "Image Width");
        assert_eq!(psd.tag_name(0x99), "Unknown tag (0x0099)");

        let names: Vec<Option<&str>> = psd.tags().map(|t| t.name).collect();
        assert_eq!(names, vec![Some("Image Width"), None]);

        assert_eq!(Directory::new(TEST_KIND).tag_name(1), "Unknown tag (0x0001)");
    }

    #[test]
    fn soft_errors_are_kept() {
        logger();

        let mut d = Directory::new(TEST_KIND);
        assert!(!d.has_errors());

        d.add_error("something looked off");
        assert!(d.has_errors());
        assert_eq!(d.errors(), ["something looked off"]);
    }
}
