//! Single-pass structural validation over `serde_yaml::Value` records.
//!
//! Every helper reports violations into the [`Validator`] and returns `None`
//! for the offending field, so a descriptor keeps reading its remaining
//! fields before giving up. Violations are recorded in field-declaration
//! order.

use serde_yaml::{Mapping, Value};

use super::{FieldPath, url::check_absolute_url};
use crate::error::SchemaError;

/// A closed set of string values.
pub trait Choice: Sized + Copy + 'static {
    /// Accepted spellings, in declaration order.
    const ALLOWED: &'static [&'static str];

    /// Description of the accepted values used when the field is missing or
    /// not a string, e.g. `"one of active|paused|archived"`.
    const EXPECTED: &'static str;

    /// Look up a variant by its accepted spelling.
    fn from_name(name: &str) -> Option<Self>;

    /// The accepted spelling of this variant.
    fn name(self) -> &'static str;
}

/// A nested object that validates from a [`Record`].
pub(crate) trait Descriptor: Sized {
    fn from_record(v: &mut Validator, record: Record<'_>) -> Option<Self>;
}

/// A mapping under validation, together with where it was found.
pub(crate) struct Record<'a> {
    map: &'a Mapping,
    path: FieldPath,
}

impl<'a> Record<'a> {
    fn field(&self, key: &'static str) -> (Option<&'a Value>, FieldPath) {
        (self.map.get(key), self.path.key(key))
    }
}

/// Collects schema violations during one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    issues: Vec<SchemaError>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Turn the outcome of a pass into a result.
    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, Vec<SchemaError>> {
        match value {
            Some(value) if self.issues.is_empty() => Ok(value),
            _ => Err(self.issues),
        }
    }

    fn invalid(&mut self, path: FieldPath, expected: &'static str, found: Option<&Value>) {
        self.issues.push(SchemaError::MissingOrInvalidField {
            path,
            expected,
            found: describe(found),
        });
    }

    /// Open `value` as a record, reporting anything that is not a mapping.
    pub(crate) fn record<'a>(&mut self, value: &'a Value, path: FieldPath) -> Option<Record<'a>> {
        match value {
            Value::Mapping(map) => Some(Record { map, path }),
            other => {
                self.invalid(path, "object", Some(other));
                None
            }
        }
    }

    fn string_at(&mut self, value: &Value, path: FieldPath) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.invalid(path, "string", Some(other));
                None
            }
        }
    }

    fn url_at(&mut self, value: &Value, path: FieldPath) -> Option<String> {
        let raw = self.string_at(value, path.clone())?;
        match check_absolute_url(&raw) {
            Ok(_) => Some(raw),
            Err(reason) => {
                self.issues.push(SchemaError::InvalidUrl {
                    path,
                    value: raw,
                    reason,
                });
                None
            }
        }
    }

    fn choice_at<T: Choice>(&mut self, value: &Value, path: FieldPath) -> Option<T> {
        let Value::String(raw) = value else {
            self.invalid(path, T::EXPECTED, Some(value));
            return None;
        };
        let raw = raw.clone();
        let choice = T::from_name(&raw);
        if choice.is_none() {
            self.issues.push(SchemaError::InvalidEnumValue {
                path,
                value: raw,
                allowed: T::ALLOWED,
            });
        }
        choice
    }

    pub(crate) fn required_string(&mut self, record: &Record<'_>, key: &'static str) -> Option<String> {
        match record.field(key) {
            (Some(value), path) => self.string_at(value, path),
            (None, path) => {
                self.invalid(path, "string", None);
                None
            }
        }
    }

    /// Outer `None` means the field was present but invalid.
    pub(crate) fn optional_string(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
    ) -> Option<Option<String>> {
        match record.field(key) {
            (Some(value), path) => self.string_at(value, path).map(Some),
            (None, _) => Some(None),
        }
    }

    pub(crate) fn required_url(&mut self, record: &Record<'_>, key: &'static str) -> Option<String> {
        match record.field(key) {
            (Some(value), path) => self.url_at(value, path),
            (None, path) => {
                self.invalid(path, "URL string", None);
                None
            }
        }
    }

    pub(crate) fn optional_url(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
    ) -> Option<Option<String>> {
        match record.field(key) {
            (Some(value), path) => self.url_at(value, path).map(Some),
            (None, _) => Some(None),
        }
    }

    pub(crate) fn optional_bool(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
    ) -> Option<Option<bool>> {
        match record.field(key) {
            (Some(Value::Bool(b)), _) => Some(Some(*b)),
            (Some(other), path) => {
                self.invalid(path, "boolean", Some(other));
                None
            }
            (None, _) => Some(None),
        }
    }

    /// A required enumerated field.
    pub(crate) fn required_choice<T: Choice>(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
    ) -> Option<T> {
        match record.field(key) {
            (Some(value), path) => self.choice_at(value, path),
            (None, path) => {
                self.invalid(path, T::EXPECTED, None);
                None
            }
        }
    }

    /// An enumerated field that falls back to `default` when absent.
    pub(crate) fn choice_or<T: Choice>(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
        default: T,
    ) -> Option<T> {
        match record.field(key) {
            (Some(value), path) => self.choice_at(value, path),
            (None, _) => Some(default),
        }
    }

    /// A sequence of strings; absent normalizes to empty.
    pub(crate) fn string_list(&mut self, record: &Record<'_>, key: &'static str) -> Option<Vec<String>> {
        match record.field(key) {
            (Some(Value::Sequence(items)), path) => {
                let values: Vec<_> = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.string_at(item, path.index(i)))
                    .collect();
                values.into_iter().collect()
            }
            (Some(other), path) => {
                self.invalid(path, "array of strings", Some(other));
                None
            }
            (None, _) => Some(Vec::new()),
        }
    }

    /// A nested descriptor that may be absent.
    pub(crate) fn optional_descriptor<T: Descriptor>(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
    ) -> Option<Option<T>> {
        match record.field(key) {
            (Some(value), path) => {
                let nested = self.record(value, path)?;
                T::from_record(self, nested).map(Some)
            }
            (None, _) => Some(None),
        }
    }

    /// A nested descriptor that takes its own defaults when absent.
    pub(crate) fn descriptor_or_default<T: Descriptor + Default>(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
    ) -> Option<T> {
        self.optional_descriptor(record, key)
            .map(Option::unwrap_or_default)
    }

    /// A sequence of descriptors; absent normalizes to empty.
    ///
    /// Every element is checked, and any failing element fails the list.
    pub(crate) fn descriptor_list<T: Descriptor>(
        &mut self,
        record: &Record<'_>,
        key: &'static str,
    ) -> Option<Vec<T>> {
        match record.field(key) {
            (Some(Value::Sequence(items)), path) => {
                let values: Vec<_> = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let nested = self.record(item, path.index(i))?;
                        T::from_record(self, nested)
                    })
                    .collect();
                values.into_iter().collect()
            }
            (Some(other), path) => {
                self.invalid(path, "array of objects", Some(other));
                None
            }
            (None, _) => Some(Vec::new()),
        }
    }
}

/// Short type name of a raw value for error messages.
fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Sequence(_)) => "array",
        Some(Value::Mapping(_)) => "object",
        Some(Value::Tagged(_)) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).expect("valid yaml")
    }

    #[test]
    fn test_record_rejects_non_mapping() {
        let value = yaml("- a\n- b");
        let mut v = Validator::new();
        assert!(v.record(&value, FieldPath::root()).is_none());

        let errors = v.finish::<()>(None).expect_err("not a mapping");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "(root): expected object, found array");
    }

    #[test]
    fn test_string_list_reports_each_bad_element() {
        let value = yaml("tags: [rust, 3, true]");
        let mut v = Validator::new();
        let record = v.record(&value, FieldPath::root()).expect("mapping");

        assert!(v.string_list(&record, "tags").is_none());
        let errors = v.finish::<()>(None).expect_err("bad elements");
        let paths: Vec<_> = errors.iter().map(|e| e.path().to_string()).collect();
        assert_eq!(paths, vec!["tags[1]", "tags[2]"]);
    }

    #[test]
    fn test_absent_optionals_are_not_errors() {
        let value = yaml("name: x");
        let mut v = Validator::new();
        let record = v.record(&value, FieldPath::root()).expect("mapping");

        assert_eq!(v.optional_string(&record, "service"), Some(None));
        assert_eq!(v.optional_url(&record, "url"), Some(None));
        assert_eq!(v.optional_bool(&record, "private"), Some(None));
        assert_eq!(v.string_list(&record, "notes"), Some(Vec::new()));
        assert!(v.finish(Some(())).is_ok());
    }

    #[test]
    fn test_null_is_not_absent() {
        let value = yaml("service: ~");
        let mut v = Validator::new();
        let record = v.record(&value, FieldPath::root()).expect("mapping");

        assert_eq!(v.optional_string(&record, "service"), None);
        let errors = v.finish::<()>(None).expect_err("null");
        assert_eq!(errors[0].to_string(), "service: expected string, found null");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "nothing");
        assert_eq!(describe(Some(&yaml("1"))), "number");
        assert_eq!(describe(Some(&yaml("{a: 1}"))), "object");
    }
}
