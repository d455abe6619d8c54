pub mod stub_server;
pub mod vidpredict_env;
