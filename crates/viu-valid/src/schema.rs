//! # Field Descriptors
//!
//! Immutable, composable schema descriptors. Each constraint-adding
//! builder call consumes and returns the descriptor; the finished
//! [`Schema`] is evaluated by the single interpreter in [`crate::eval`]
//! rather than by per-type trait objects, so new constraints only ever
//! touch one evaluation function.
//!
//! Constraint methods take the violation message alongside the bound,
//! keeping product wording (Portuguese, in VIU's case) out of the
//! engine: the engine only supplies defaults for structural mismatches.

use std::sync::Arc;

use futures::future::BoxFuture;
use regex::Regex;
use serde_json::Value;

/// A composable validation schema for one JSON value.
#[derive(Debug, Clone)]
pub enum Schema {
    String(StringSchema),
    Integer(IntegerSchema),
    Float(FloatSchema),
    Bool(BoolSchema),
    DateTime(DateTimeSchema),
    Enum(EnumSchema),
    Array(ArraySchema),
    Object(ObjectSchema),
}

/// Starts a string schema.
pub fn string() -> StringSchema {
    StringSchema::default()
}

/// Starts an integer schema (rejects fractional numbers).
pub fn integer() -> IntegerSchema {
    IntegerSchema::default()
}

/// Starts a float schema (accepts any JSON number).
pub fn float() -> FloatSchema {
    FloatSchema::default()
}

/// Starts a boolean schema.
pub fn boolean() -> BoolSchema {
    BoolSchema::default()
}

/// Starts a datetime schema (RFC 3339 strings).
pub fn datetime() -> DateTimeSchema {
    DateTimeSchema::default()
}

/// Starts an enum schema over the given allowed values.
pub fn enumeration<I, S>(allowed: I, message: impl Into<String>) -> EnumSchema
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EnumSchema {
        allowed: allowed.into_iter().map(Into::into).collect(),
        message: message.into(),
    }
}

/// Starts an array schema with the given element schema.
pub fn array(item: impl Into<Schema>) -> ArraySchema {
    ArraySchema {
        item: Box::new(item.into()),
        min_items: None,
        max_items: None,
        unique: None,
    }
}

/// Starts an object schema.
pub fn object() -> ObjectSchema {
    ObjectSchema::default()
}

/// String constraints and transforms.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    pub(crate) min_len: Option<(usize, String)>,
    pub(crate) max_len: Option<(usize, String)>,
    pub(crate) pattern: Option<(Regex, String)>,
    pub(crate) trim: bool,
    pub(crate) lowercase: bool,
}

impl StringSchema {
    /// Minimum length, checked after transforms.
    pub fn min_len(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_len = Some((min, message.into()));
        self
    }

    /// Maximum length, checked after transforms.
    pub fn max_len(mut self, max: usize, message: impl Into<String>) -> Self {
        self.max_len = Some((max, message.into()));
        self
    }

    /// The value must match `pattern` (checked after transforms).
    pub fn pattern(mut self, pattern: &Regex, message: impl Into<String>) -> Self {
        self.pattern = Some((pattern.clone(), message.into()));
        self
    }

    /// Trim surrounding whitespace before checks; the trimmed value is
    /// what the validated output carries.
    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Lowercase before checks; the lowercased value is what the
    /// validated output carries.
    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }
}

/// Integer bounds.
#[derive(Debug, Clone, Default)]
pub struct IntegerSchema {
    pub(crate) min: Option<(i64, String)>,
    pub(crate) max: Option<(i64, String)>,
}

impl IntegerSchema {
    pub fn min(mut self, min: i64, message: impl Into<String>) -> Self {
        self.min = Some((min, message.into()));
        self
    }

    pub fn max(mut self, max: i64, message: impl Into<String>) -> Self {
        self.max = Some((max, message.into()));
        self
    }
}

/// Float bounds.
#[derive(Debug, Clone, Default)]
pub struct FloatSchema {
    pub(crate) min: Option<(f64, String)>,
    pub(crate) max: Option<(f64, String)>,
}

impl FloatSchema {
    pub fn min(mut self, min: f64, message: impl Into<String>) -> Self {
        self.min = Some((min, message.into()));
        self
    }

    pub fn max(mut self, max: f64, message: impl Into<String>) -> Self {
        self.max = Some((max, message.into()));
        self
    }
}

/// Boolean constraints.
#[derive(Debug, Clone, Default)]
pub struct BoolSchema {
    pub(crate) must_be_true: Option<String>,
}

impl BoolSchema {
    /// The value must be `true` — used for terms-of-use style
    /// acceptance fields.
    pub fn must_be_true(mut self, message: impl Into<String>) -> Self {
        self.must_be_true = Some(message.into());
        self
    }
}

/// RFC 3339 datetime strings. The validated output carries the input
/// string unchanged, so validation is idempotent.
#[derive(Debug, Clone, Default)]
pub struct DateTimeSchema {
    pub(crate) message: Option<String>,
}

impl DateTimeSchema {
    /// Override the malformed-datetime message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Membership in a fixed set of string values.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    pub(crate) allowed: Vec<String>,
    pub(crate) message: String,
}

/// Array of homogeneous elements.
#[derive(Debug, Clone)]
pub struct ArraySchema {
    pub(crate) item: Box<Schema>,
    pub(crate) min_items: Option<(usize, String)>,
    pub(crate) max_items: Option<(usize, String)>,
    pub(crate) unique: Option<String>,
}

impl ArraySchema {
    pub fn min_items(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_items = Some((min, message.into()));
        self
    }

    pub fn max_items(mut self, max: usize, message: impl Into<String>) -> Self {
        self.max_items = Some((max, message.into()));
        self
    }

    /// Elements must be pairwise distinct (compared as JSON values).
    pub fn unique(mut self, message: impl Into<String>) -> Self {
        self.unique = Some(message.into());
        self
    }
}

/// One declared field of an object schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub(crate) name: String,
    pub(crate) schema: Schema,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
}

/// A cross-field rule: a predicate over the whole normalized object,
/// with the error attributed to a specific field path.
#[derive(Clone)]
pub struct Refinement {
    pub(crate) path: String,
    pub(crate) message: String,
    pub(crate) predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl std::fmt::Debug for Refinement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refinement")
            .field("path", &self.path)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// A cross-field rule whose predicate awaits an external check
/// (uniqueness, existence). The engine never talks to storage; the
/// caller supplies the future.
#[derive(Clone)]
pub struct AsyncRefinement {
    pub(crate) path: String,
    pub(crate) message: String,
    pub(crate) predicate: Arc<dyn Fn(&Value) -> BoxFuture<'static, bool> + Send + Sync>,
}

impl std::fmt::Debug for AsyncRefinement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncRefinement")
            .field("path", &self.path)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Structured object with declared fields, defaults, and refinements.
///
/// Unknown keys are stripped from the validated output; absent
/// optional fields are omitted; absent fields with a declared default
/// take it.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) refinements: Vec<Refinement>,
    pub(crate) async_refinements: Vec<AsyncRefinement>,
}

impl ObjectSchema {
    /// Declare a required field.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            schema: schema.into(),
            required: true,
            default: None,
        });
        self
    }

    /// Declare an optional field: absence is fine, presence is validated.
    pub fn optional_field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            schema: schema.into(),
            required: false,
            default: None,
        });
        self
    }

    /// Declare a field that takes `default` when absent.
    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        schema: impl Into<Schema>,
        default: Value,
    ) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            schema: schema.into(),
            required: false,
            default: Some(default),
        });
        self
    }

    /// Attach a synchronous cross-field rule. `predicate` receives the
    /// whole normalized object and returns `false` to signal a
    /// violation, reported at `path` with `message`.
    pub fn refine(
        mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.refinements.push(Refinement {
            path: path.into(),
            message: message.into(),
            predicate: Arc::new(predicate),
        });
        self
    }

    /// Attach an asynchronous cross-field rule. Runs only after every
    /// synchronous check passed; the predicate clones whatever it
    /// needs out of the object before awaiting.
    pub fn refine_async(
        mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        predicate: impl Fn(&Value) -> BoxFuture<'static, bool> + Send + Sync + 'static,
    ) -> Self {
        self.async_refinements.push(AsyncRefinement {
            path: path.into(),
            message: message.into(),
            predicate: Arc::new(predicate),
        });
        self
    }

    /// Finish building.
    pub fn build(self) -> Schema {
        Schema::Object(self)
    }
}

impl From<StringSchema> for Schema {
    fn from(s: StringSchema) -> Self {
        Schema::String(s)
    }
}

impl From<IntegerSchema> for Schema {
    fn from(s: IntegerSchema) -> Self {
        Schema::Integer(s)
    }
}

impl From<FloatSchema> for Schema {
    fn from(s: FloatSchema) -> Self {
        Schema::Float(s)
    }
}

impl From<BoolSchema> for Schema {
    fn from(s: BoolSchema) -> Self {
        Schema::Bool(s)
    }
}

impl From<DateTimeSchema> for Schema {
    fn from(s: DateTimeSchema) -> Self {
        Schema::DateTime(s)
    }
}

impl From<EnumSchema> for Schema {
    fn from(s: EnumSchema) -> Self {
        Schema::Enum(s)
    }
}

impl From<ArraySchema> for Schema {
    fn from(s: ArraySchema) -> Self {
        Schema::Array(s)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(s: ObjectSchema) -> Self {
        Schema::Object(s)
    }
}
