//! Thin REST client over `fetch`. The canvas never calls this; the form
//! fires a create request and the auth/profile routes exist for the host
//! shell.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const API_URL: &str = "http://localhost:5000/api";

async fn request(
	method: &str,
	path: &str,
	body: Option<String>,
	token: Option<&str>,
) -> Result<JsValue, JsValue> {
	let opts = RequestInit::new();
	opts.set_method(method);
	opts.set_mode(RequestMode::Cors);
	if let Some(body) = body {
		opts.set_body(&JsValue::from_str(&body));
	}

	let request = Request::new_with_str_and_init(&format!("{}{}", API_URL, path), &opts)?;
	let headers = request.headers();
	headers.set("Content-Type", "application/json")?;
	if let Some(token) = token {
		headers.set("Authorization", &format!("Bearer {}", token))?;
	}

	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let response = JsFuture::from(window.fetch_with_request(&request)).await?;
	let response: Response = response.dyn_into()?;
	let json: js_sys::Promise = response.json()?;
	JsFuture::from(json).await
}

fn to_body<T: Serialize>(payload: &T) -> Result<String, JsValue> {
	serde_json::to_string(payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Registration and login.
pub mod auth {
	use super::*;

	#[derive(Debug, Serialize)]
	pub struct Credentials {
		pub email: String,
		pub password: String,
	}

	#[derive(Debug, Serialize)]
	pub struct Registration {
		pub username: String,
		pub email: String,
		pub password: String,
	}

	pub async fn register(user: &Registration) -> Result<JsValue, JsValue> {
		request("POST", "/auth/register", Some(to_body(user)?), None).await
	}

	pub async fn login(credentials: &Credentials) -> Result<JsValue, JsValue> {
		request("POST", "/auth/login", Some(to_body(credentials)?), None).await
	}
}

/// Profile routes; all take a bearer token.
pub mod users {
	use super::*;

	#[derive(Debug, Default, Serialize)]
	pub struct ProfileUpdate {
		#[serde(skip_serializing_if = "Option::is_none")]
		pub username: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub email: Option<String>,
	}

	pub async fn get_profile(user_id: &str, token: &str) -> Result<JsValue, JsValue> {
		request("GET", &format!("/users/profile/{}", user_id), None, Some(token)).await
	}

	pub async fn update_profile(
		user_id: &str,
		update: &ProfileUpdate,
		token: &str,
	) -> Result<JsValue, JsValue> {
		request(
			"PUT",
			&format!("/users/profile/{}", user_id),
			Some(to_body(update)?),
			Some(token),
		)
		.await
	}

	pub async fn delete_profile(user_id: &str, token: &str) -> Result<JsValue, JsValue> {
		request("DELETE", &format!("/users/profile/{}", user_id), None, Some(token)).await
	}
}

/// Story routes consumed by the creation form.
pub mod stories {
	use super::*;

	#[derive(Debug, Serialize)]
	pub struct NewStory {
		pub title: String,
		pub author: String,
		pub category: String,
		pub excerpt: String,
		pub color: String,
		pub connections: u32,
	}

	pub async fn create(story: &NewStory) -> Result<JsValue, JsValue> {
		request("POST", "/stories", Some(to_body(story)?), None).await
	}
}
