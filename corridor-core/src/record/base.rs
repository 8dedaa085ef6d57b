//! Base implementation of records.
use crate::error::EnvError;
use std::collections::HashMap;

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value.
    Scalar(f32),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A 2-dimensional array in row-major order with its shape `[rows, cols]`.
    Array2(Vec<f32>, [usize; 2]),

    /// A text value, e.g. the name of an action.
    String(String),
}

/// A container for storing key-value pairs of various data types.
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Inserts a key-value pair into the record.
    ///
    /// An existing value under the same key is replaced.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Fails if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, EnvError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(EnvError::RecordValueTypeError("Scalar".to_string())),
            None => Err(EnvError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, EnvError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(EnvError::RecordValueTypeError("Array1".to_string())),
            None => Err(EnvError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 2-dimensional array and its shape from the record.
    pub fn get_array2(&self, k: &str) -> Result<(Vec<f32>, [usize; 2]), EnvError> {
        match self.0.get(k) {
            Some(RecordValue::Array2(v, s)) => Ok((v.clone(), *s)),
            Some(_) => Err(EnvError::RecordValueTypeError("Array2".to_string())),
            None => Err(EnvError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, EnvError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(EnvError::RecordValueTypeError("String".to_string())),
            None => Err(EnvError::RecordKeyError(k.to_string())),
        }
    }
}
