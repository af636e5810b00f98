use crate::server::{
    error::{menu::MenuError, AppError},
    model::menu::{CreateMenuParam, CreateMenuProductParam},
    service::menu::MenuService,
};
use test_utils::{builder::TestBuilder, factory};

mod list;
