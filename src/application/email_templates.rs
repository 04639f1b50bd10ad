const BRAND_NAME: &str = "Nexus Community";

fn first_name(fullname: &str) -> &str {
    fullname.split_whitespace().next().unwrap_or("there")
}

fn primary_button(url: &str, label: &str) -> String {
    format!(
        r#"<a href="{url}" style="display:inline-block;padding:10px 20px;background-color:#007b5e;color:#ffffff;text-decoration:none;border-radius:5px;font-weight:600;">{label}</a>"#
    )
}

/// Email sent after signup and on resend-verification. The link embeds the
/// verification token and expires with it.
pub fn verification_email(
    base_url: &str,
    fullname: &str,
    token: &str,
    ttl_minutes: i64,
) -> (String, String) {
    let subject = format!("Verify your {BRAND_NAME} account");
    let verify_url = format!("{base_url}/verify-email?token={token}");
    let button = primary_button(&verify_url, "Verify Email");
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.5;">
  <p>Hi {name},</p>
  <p>Welcome to <b>{BRAND_NAME}</b>! Please verify your email below:</p>
  <p>{button}</p>
  <p>This link expires in {ttl_minutes} minutes.</p>
</div>"#,
        name = first_name(fullname),
    );
    (subject, html)
}

/// Email carrying the password-reset link.
pub fn reset_password_email(
    base_url: &str,
    fullname: &str,
    token: &str,
    ttl_minutes: i64,
) -> (String, String) {
    let subject = format!("Password Reset - {BRAND_NAME}");
    let reset_url = format!("{base_url}/reset-password/{token}");
    let button = primary_button(&reset_url, "Reset Password");
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.5;">
  <p>Hello {name},</p>
  <p>You requested to reset your password. Click the link below to set a new one (valid for {ttl_minutes} minutes):</p>
  <p>{button}</p>
  <p>If you didn't request this, just ignore this email.</p>
  <br><p>&mdash; {BRAND_NAME}</p>
</div>"#,
        name = first_name(fullname),
    );
    (subject, html)
}
