//! Application state definitions

use super::{FormData, StepOneForm, ValidationErrors};

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Step data, owned here on behalf of the surrounding intake flow
    pub data: FormData,
    /// Errors from the last validation pass
    pub errors: ValidationErrors,
    /// Form widget focus state
    pub form: StepOneForm,
}
