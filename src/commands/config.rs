use crate::services::config_service;

pub fn get_api_base() -> Result<Option<String>, String> {
    config_service::get_api_base()
}

pub fn set_api_base(url: String) -> Result<(), String> {
    config_service::set_api_base(&url)
}

pub fn set_fan_out(fan_out: usize) -> Result<(), String> {
    config_service::set_fan_out(fan_out)
}

pub fn get_config() -> Result<config_service::Config, String> {
    config_service::get_full_config()
}
