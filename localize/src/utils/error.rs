use thiserror::Error;

/// Resolution error
///
/// Failures are local to the resolution step; the middleware degrades to
/// passing the request through rather than aborting the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizeError {
    #[error("no language resolvable: no default language configured and no request signal matched")]
    NoLanguageResolvable,

    #[error("rewritten path '{path}' is not a valid request target")]
    PathRewrite { path: String },
}
