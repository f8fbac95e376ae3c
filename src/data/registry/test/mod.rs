use crate::{
    data::registry::RegistryRepository,
    error::registry::PersistenceError,
    model::record::{Record, Registry},
};
use test_utils::{builder::TestBuilder, error::TestError, fixture};

mod save;
