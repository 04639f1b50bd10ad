//! Server-rendered HTML. Plain string templates, same style as the email
//! bodies; no templating engine.

use crate::domain::entities::{member::Member, user::User};

const SITE_NAME: &str = "Nexus Community";

/// Escapes user-provided text for interpolation into HTML.
fn esc(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - {SITE_NAME}</title>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/about">About</a>
    <a href="/projects">Projects</a>
    <a href="/contact">Contact</a>
    <a href="/join">Join Us</a>
    <a href="/login">Login</a>
  </nav>
  <main>
{body}
  </main>
</body>
</html>"#,
        title = esc(title),
    )
}

fn notice_block(error: Option<&str>, message: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(error) = error {
        out.push_str(&format!(r#"    <p class="error">{}</p>"#, esc(error)));
        out.push('\n');
    }
    if let Some(message) = message {
        out.push_str(&format!(r#"    <p class="message">{}</p>"#, esc(message)));
        out.push('\n');
    }
    out
}

pub fn home_page() -> String {
    layout(
        "Home",
        &format!(
            r#"    <h1>{SITE_NAME}</h1>
    <p>A community organization bringing people together through arts, academics and events.</p>
    <p><a href="/join">Become a member</a></p>"#
        ),
    )
}

pub fn about_page() -> String {
    layout(
        "About",
        &format!(
            r#"    <h1>About {SITE_NAME}</h1>
    <p>We are a volunteer-run community organization. Our projects are open to everyone.</p>"#
        ),
    )
}

pub fn contact_page() -> String {
    layout(
        "Contact",
        r#"    <h1>Contact</h1>
    <p>Reach us through the join form and we will get back to you.</p>"#,
    )
}

pub fn join_page() -> String {
    layout(
        "Join Us",
        r#"    <h1>Join Us</h1>
    <form method="post" action="/join">
      <label>Name <input name="name" required></label>
      <label>Email <input name="email" type="email" required></label>
      <label>Phone <input name="phone"></label>
      <label>Message <textarea name="message"></textarea></label>
      <button type="submit">Send</button>
    </form>"#,
    )
}

pub fn thank_you_page(email: &str, verified: bool, ttl_minutes: i64) -> String {
    let body = if verified {
        format!(
            r#"    <h1>Email verified</h1>
    <p>Thanks! <b>{}</b> is now verified. You can <a href="/login">log in</a>.</p>"#,
            esc(email)
        )
    } else {
        format!(
            r#"    <h1>Thank you!</h1>
    <p>We sent a verification link to <b>{}</b>. Please check your inbox; the link expires in {ttl_minutes} minutes.</p>
    <form method="post" action="/resend-verification">
      <input type="hidden" name="email" value="{}">
      <button type="submit">Resend verification email</button>
    </form>"#,
            esc(email),
            esc(email)
        )
    };
    layout("Thank You", &body)
}

pub fn projects_page(user_name: Option<&str>) -> String {
    let greeting = match user_name {
        Some(name) => format!(r#"    <p>Welcome back, {}!</p>"#, esc(name)),
        None => r#"    <p><a href="/login?next=%2Fprojects">Log in</a> to join a project.</p>"#
            .to_string(),
    };
    layout(
        "Projects",
        &format!(
            r#"    <h1>Our Projects</h1>
{greeting}
    <ul>
      <li><a href="/join-project?type=Arts">Arts</a></li>
      <li><a href="/join-project?type=Academics">Academics</a></li>
      <li><a href="/join-project?type=Events">Events</a></li>
    </ul>"#
        ),
    )
}

pub fn join_project_page(project_type: &str) -> String {
    layout(
        &format!("Join {project_type} Project"),
        &format!(
            r#"    <h1>Join the {} project</h1>
    <p>Thanks for your interest. A coordinator will contact you.</p>"#,
            esc(project_type)
        ),
    )
}

pub fn login_page(error: Option<&str>, message: Option<&str>, next: &str) -> String {
    let notices = notice_block(error, message);
    layout(
        "Login",
        &format!(
            r#"{notices}    <h1>Login</h1>
    <form method="post" action="/login">
      <input type="hidden" name="next" value="{next}">
      <label>Email <input name="email" type="email" required></label>
      <label>Password <input name="password" type="password" required></label>
      <button type="submit">Log in</button>
    </form>
    <p><a href="/forgot-password">Forgot password?</a> &middot; <a href="/signup">Sign up</a></p>"#,
            next = esc(next),
        ),
    )
}

pub fn signup_page(error: Option<&str>, next: &str) -> String {
    let notices = notice_block(error, None);
    layout(
        "Sign Up",
        &format!(
            r#"{notices}    <h1>Sign Up</h1>
    <form method="post" action="/signup">
      <input type="hidden" name="next" value="{next}">
      <label>Full name <input name="fullname" required></label>
      <label>Email <input name="email" type="email" required></label>
      <label>Password <input name="password" type="password" required></label>
      <label>Confirm password <input name="confirm_password" type="password" required></label>
      <label>Phone <input name="phone"></label>
      <label>Region <input name="region"></label>
      <label>City <input name="city"></label>
      <label>Age <input name="age" type="number"></label>
      <button type="submit">Create account</button>
    </form>
    <p>Already registered? <a href="/login">Log in</a></p>"#,
            next = esc(next),
        ),
    )
}

pub fn verify_failed_page() -> String {
    layout(
        "Verify Email",
        r#"    <h1>Verification failed</h1>
    <p class="error">Invalid or expired verification link.</p>
    <p>You can request a new link from the <a href="/login">login page</a>.</p>"#,
    )
}

pub fn forgot_password_page(message: Option<&str>) -> String {
    let notices = notice_block(None, message);
    layout(
        "Forgot Password",
        &format!(
            r#"{notices}    <h1>Forgot Password</h1>
    <form method="post" action="/forgot-password">
      <label>Email <input name="email" type="email" required></label>
      <button type="submit">Send reset link</button>
    </form>"#
        ),
    )
}

pub fn reset_password_page(token: &str, error: Option<&str>) -> String {
    let notices = notice_block(error, None);
    layout(
        "Reset Password",
        &format!(
            r#"{notices}    <h1>Reset Password</h1>
    <form method="post" action="/reset-password/{token}">
      <label>New password <input name="password" type="password" required></label>
      <label>Confirm password <input name="confirm_password" type="password" required></label>
      <button type="submit">Set new password</button>
    </form>"#,
            token = esc(token),
        ),
    )
}

pub fn reset_expired_page() -> String {
    layout(
        "Reset Password",
        r#"    <h1>Link expired</h1>
    <p class="error">This reset link is invalid or has expired.</p>
    <p><a href="/forgot-password">Request a new one</a>.</p>"#,
    )
}

pub fn reset_success_page() -> String {
    layout(
        "Password Reset Successful",
        r#"    <h1>Password updated</h1>
    <p>Your password has been reset. You can now <a href="/login">log in</a>.</p>"#,
    )
}

pub fn message_page(msg: &str) -> String {
    layout("Notice", &format!("    <p>{}</p>", esc(msg)))
}

pub fn admin_login_page(error: Option<&str>) -> String {
    let notices = notice_block(error, None);
    layout(
        "Admin Login",
        &format!(
            r#"{notices}    <h1>Admin Login</h1>
    <form method="post" action="/admin/login">
      <label>Email <input name="email" type="email" required></label>
      <label>Password <input name="password" type="password" required></label>
      <button type="submit">Log in</button>
    </form>"#
        ),
    )
}

pub fn admin_dashboard_page(users: &[User], members: &[Member]) -> String {
    let mut user_rows = String::new();
    for user in users {
        user_rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            esc(&user.fullname),
            esc(&user.email),
            if user.is_verified { "yes" } else { "no" },
        ));
    }
    let mut member_rows = String::new();
    for member in members {
        member_rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            esc(&member.name),
            esc(&member.email),
            esc(member.phone.as_deref().unwrap_or("")),
            esc(member.message.as_deref().unwrap_or("")),
        ));
    }
    layout(
        "Admin Dashboard",
        &format!(
            r#"    <h1>Admin Dashboard</h1>
    <p><a href="/admin/logout">Log out</a></p>
    <h2>Registered users ({user_count})</h2>
    <table>
      <tr><th>Name</th><th>Email</th><th>Verified</th></tr>
{user_rows}    </table>
    <h2>Interested members ({member_count})</h2>
    <table>
      <tr><th>Name</th><th>Email</th><th>Phone</th><th>Message</th></tr>
{member_rows}    </table>"#,
            user_count = users.len(),
            member_count = members.len(),
        ),
    )
}
