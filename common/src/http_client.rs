use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

pub async fn http_get_text(http_client: &Client, url: &str, request_headers: &Vec<(String, String)>) -> Result<String, String> {
  log::debug!("http_get_text: url = {}", url);
  let mut request_headers_map = HeaderMap::new();
  for (key, value) in request_headers {
    let header_name = HeaderName::from_str(key).map_err(|err| format!("{}", err))?;
    let header_value = HeaderValue::from_str(value).map_err(|err| format!("{}", err))?;
    request_headers_map.insert(header_name, header_value);
  }
  let response = http_client.get(url).headers(request_headers_map).send().await;
  if response.is_err() {
    return Err(format!("{}", response.err().unwrap()));
  }
  let response = response.unwrap();
  let response_status = response.status().as_u16();
  let is_2xx = response_status >= 200 && response_status <= 299;
  if is_2xx == false {
    return Err(format!("invalid response status: {}", response_status));
  }
  let stringified_response_body = response.text().await;
  if stringified_response_body.is_err() {
    return Err(format!("{}", stringified_response_body.err().unwrap()));
  }
  return Ok(stringified_response_body.unwrap());
}

pub async fn http_get_json<T>(http_client: &Client, url: &str, request_headers: &Vec<(String, String)>) -> Result<T, String>
where
  T: for<'de> serde::Deserialize<'de>,
{
  let stringified_response_body = http_get_text(http_client, url, request_headers).await?;
  let parsed_response_body = serde_json::from_str::<T>(&stringified_response_body);
  if parsed_response_body.is_err() {
    return Err(format!("{}", parsed_response_body.err().unwrap()));
  }
  return Ok(parsed_response_body.unwrap());
}
