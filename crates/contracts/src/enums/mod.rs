pub mod upload_module;
