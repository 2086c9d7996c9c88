//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient` 特性。

use dimfolio::FolioError;
use dimfolio::FolioResult;
use dimfolio::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, e: JsValue) -> FolioError {
    FolioError::transport(format!("{}: {:?}", context, e))
}

/// 基于浏览器 fetch 的 HTTP 客户端
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build(req: &HttpRequest) -> FolioResult<Request> {
        let headers = Headers::new().map_err(|e| js_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts).map_err(|e| js_error("请求构建失败", e))
    }

    async fn text(response: &Response) -> FolioResult<String> {
        let promise = response
            .text()
            .map_err(|e| FolioError::serialization(format!("{:?}", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| FolioError::serialization(format!("{:?}", e)))?;
        text.as_string()
            .ok_or_else(|| FolioError::serialization("无法转换为字符串"))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> FolioResult<HttpResponse> {
        let request = Self::build(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| FolioError::transport("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("网络错误", e))?;

        let response: Response = resp_value.dyn_into().map_err(|e| {
            FolioError::serialization(format!("Response 类型转换失败: {:?}", e))
        })?;

        let body = Self::text(&response).await?;
        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
