// environment_provider.rs — Environment variable abstraction
//
// Provides a trait for env var access so the color table can be tested with
// preset values instead of the real process environment.

/// Trait for environment variable access.
pub trait EnvironmentProvider {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  get_env_var
    //
    //  Returns the value of the named environment variable, if set.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn get_env_var(&self, name: &str) -> Option<String>;
}





/// Default implementation that reads from the actual process environment.
pub struct DefaultEnvironmentProvider;





////////////////////////////////////////////////////////////////////////////////
//
//  impl EnvironmentProvider for DefaultEnvironmentProvider
//
//  Reads the named environment variable from the process environment.
//  A value that is not valid Unicode is passed through lossily so that a
//  malformed LSCOLORS is still reported rather than silently ignored.
//
////////////////////////////////////////////////////////////////////////////////

impl EnvironmentProvider for DefaultEnvironmentProvider {
    fn get_env_var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}





/// Mock implementation for unit tests.
/// Stores preset key-value pairs.
#[cfg(test)]
pub struct MockEnvironmentProvider {
    vars: std::collections::HashMap<String, String>,
}





#[cfg(test)]
impl Default for MockEnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl MockEnvironmentProvider
//
//  Mock environment setup for unit tests.
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
impl MockEnvironmentProvider {
    pub fn new() -> Self {
        MockEnvironmentProvider {
            vars: std::collections::HashMap::new(),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.into(), value.into());
    }
}





#[cfg(test)]
impl EnvironmentProvider for MockEnvironmentProvider {
    fn get_env_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
