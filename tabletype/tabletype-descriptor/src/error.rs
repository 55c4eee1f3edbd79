use tabletype_core::TypeError;

/// Error returned when a type descriptor cannot be turned into a type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// The text matched none of the descriptor forms.
    #[error("cannot parse type string: {text}")]
    Unparseable { text: String },

    /// The text names a valid type that is not primitive.
    #[error("cannot parse type string: {text} is not a primitive type")]
    NotPrimitive { text: String },

    /// The text matched a form but its parameters were rejected.
    #[error(transparent)]
    Type(#[from] TypeError),
}
