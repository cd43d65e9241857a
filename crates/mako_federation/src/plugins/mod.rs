pub mod module_federation;
