use crate::Result;

/// Named-route reversal, as registered by the surrounding application.
pub trait Routes {
    /// Resolve a named route to a relative path.
    ///
    /// An unregistered name is fatal ([`crate::Error::UnknownRoute`]); there
    /// is no recovery at this layer.
    fn reverse(&self, name: &str, args: &[&str]) -> Result<String>;
}

/// Scheme and host of the inbound request, for building absolute links.
#[derive(Debug, Clone)]
pub struct RequestContext {
    scheme: String,
    host: String,
}

impl RequestContext {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Absolutise a relative path against this request's scheme and host.
    pub fn absolute_uri(&self, path: &str) -> String {
        format!(
            "{}://{}/{}",
            self.scheme,
            self.host,
            path.trim_start_matches('/')
        )
    }
}

/// The URL to a course run's home page.
pub fn course_run_url(
    routes: &impl Routes,
    request: &RequestContext,
    course_id: &str,
) -> Result<String> {
    let path = routes.reverse("course_home", &[course_id])?;
    Ok(request.absolute_uri(&path))
}
