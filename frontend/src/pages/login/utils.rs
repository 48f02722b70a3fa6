use crate::api::SignInRequest;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".into());
    }
    if password.is_empty() {
        return Err("Password is required".into());
    }
    Ok(())
}

pub fn build_sign_in_request(email: &str, password: &str) -> Result<SignInRequest, String> {
    validate_credentials(email, password)?;
    Ok(SignInRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}
