use thiserror::Error;

/// Failure taxonomy for one dictionary request. Validation variants carry the
/// user-facing Spanish message; infrastructure variants carry the provider's
/// raw status and body so nothing is swallowed silently.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Por favor, selecciona o ingresa un término.")]
    EmptyTerm,

    #[error("Por favor, selecciona al menos un autor.")]
    NoAuthors,

    #[error("Has seleccionado {0} autores. Por favor, selecciona un máximo de 5.")]
    TooManyAuthors(usize),

    #[error("search API error ({status}): {body}")]
    SearchFailed {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("generation API error ({status}): {body}")]
    GenerationFailed {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The generation provider answered 200 but the response carried no
    /// `output.choices[0].text`.
    #[error("generation API returned a response with no generated text")]
    MissingGeneratedText,

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to assemble document: {0}")]
    Export(String),
}
