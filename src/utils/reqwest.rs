use crate::errors::{AppError, RequestError};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

/// 通用的 JSON POST，回傳反序列化後的結果
pub async fn post_json<B, T>(
    request_client: &Client,
    url: &str,
    headers: Option<HashMap<String, String>>,
    body: &B,
) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let mut request_builder = request_client.post(url).json(body);

    // 添加自訂標頭
    if let Some(headers_map) = headers {
        request_builder = headers_map
            .iter()
            .fold(request_builder, |builder, (key, value)| {
                builder.header(key, value)
            });
    }

    let response = request_builder.send().await?;

    // 檢查請求是否成功
    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(AppError::RequestError(RequestError::InvalidContent(
            format!("請求 {} 失敗，狀態碼: {} {}", url, status, detail),
        )));
    }

    Ok(response.json::<T>().await?)
}
