use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::RemticaError;

const APP_NAME: &str = "remtica";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn data_file_exists(filename: &str) -> bool {
    get_data_file_path(filename).exists()
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), RemticaError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T, RemticaError> {
    let file_path = get_data_file_path(filename);
    let json = fs::read_to_string(&file_path)?;
    Ok(serde_json::from_str(&json)?)
}
