//! The seam between the router and the layer embedding it.

use crate::params::PathParams;

/// A request-scoped value exposing a mutable path-parameter map.
///
/// The embedding layer owns whatever request context it likes; the router
/// only needs somewhere to write captured parameters before the handler
/// runs. Implement this on that context type.
///
/// # Example
///
/// ```
/// use waymark_core::{ParamContext, PathParams};
///
/// struct RequestState {
///     params: PathParams,
/// }
///
/// impl ParamContext for RequestState {
///     fn path_params_mut(&mut self) -> &mut PathParams {
///         &mut self.params
///     }
/// }
///
/// let mut state = RequestState { params: PathParams::new() };
/// state.path_params_mut().insert("id", "7");
/// assert_eq!(state.params.get("id"), Some("7"));
/// ```
pub trait ParamContext {
    /// Mutable access to the captured-parameter map.
    fn path_params_mut(&mut self) -> &mut PathParams;
}

/// The bare map works as a minimal context.
impl ParamContext for PathParams {
    fn path_params_mut(&mut self) -> &mut PathParams {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_params_is_its_own_context() {
        let mut params = PathParams::new();
        params.path_params_mut().insert("k", "v");
        assert_eq!(params.get("k"), Some("v"));
    }
}
