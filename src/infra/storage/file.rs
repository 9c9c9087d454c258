use crate::types::InfraError;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// ファイルパスからBufReaderを作成する
/// パースやデータ変換は各ドメインで行う
pub fn load_file<P: AsRef<Path>>(file_path: P) -> Result<BufReader<File>> {
    let file_path = file_path.as_ref();
    let file = File::open(file_path)
        .map_err(|e| InfraError::file_system(file_path.display().to_string(), e))?;
    Ok(BufReader::new(file))
}

/// JSONファイルからSerdeでDeserializeできる型を読み込む
pub fn load_json_from_file<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T> {
    let file_path = file_path.as_ref();
    let buf_reader = load_file(file_path)?;
    serde_json::from_reader(buf_reader)
        .with_context(|| format!("JSONファイルの解析に失敗: {}", file_path.display()))
}

/// YAMLファイルからSerdeでDeserializeできる型を読み込む
pub fn load_yaml_from_file<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T> {
    let file_path = file_path.as_ref();
    let buf_reader = load_file(file_path)?;
    serde_yaml::from_reader(buf_reader)
        .with_context(|| format!("YAMLファイルの解析に失敗: {}", file_path.display()))
}
