pub mod constant;
pub mod error;
pub mod fixtures;
pub mod mock;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ACCESS_TOKEN, TEST_PASSWORD, TEST_USERNAME},
        fixtures::{fixture_dir, load_fixture, load_fixture_json},
        test_setup, TestError, TestSetup,
    };
}

/// Start a mock API server, propagating setup errors with `?`
#[macro_export]
macro_rules! test_setup {
    () => {{
        $crate::TestSetup::new().await
    }};
}
