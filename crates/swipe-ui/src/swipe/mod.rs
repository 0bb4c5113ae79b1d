pub(crate) mod attachment;
pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod presentation;
pub(crate) mod registry;
