use reqwest::Response;
use serde::Deserialize;

/// Error envelope returned by the Firebase REST APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Read the `error.message` of a failed response, or describe the status when the body has none.
pub(crate) async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) if !envelope.error.message.trim().is_empty() => envelope.error.message,
        _ => format!("Request failed with status {}", status),
    }
}

/// Turn an Identity Toolkit error code such as `WEAK_PASSWORD : ...` into user-facing text.
pub(crate) fn describe_auth_error(message: &str) -> String {
    let code = message.split(" : ").next().unwrap_or(message).trim();
    let description = match code {
        "EMAIL_EXISTS" => "The email address is already in use by another account.",
        "INVALID_EMAIL" => "The email address is badly formatted.",
        "WEAK_PASSWORD" => "The password must be 6 characters long or more.",
        "OPERATION_NOT_ALLOWED" => "The given sign-in provider is disabled for this Firebase project.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "We have blocked all requests from this device due to unusual activity. Try again later."
        }
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" => {
            "The user's credential is no longer valid. The user must sign in again."
        }
        "USER_NOT_FOUND" => "There is no user record corresponding to this identifier.",
        _ => return message.to_string(),
    };
    description.to_string()
}
