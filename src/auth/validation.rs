// src/auth/validation.rs

use std::fmt;

use login_proxy_api::LoginRequest;
use serde::Serialize;

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 32;
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 64;

/// Ponctuation autorisée dans un mot de passe, en plus des lettres et chiffres ASCII
const PASSWORD_PUNCTUATION: &str = "!@#$%^&*()-_=+[]{};:,.<>?/~|";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("bad username format")]
    BadUsername,
    #[error("bad password format")]
    BadPassword,
}

/// Identifiants nettoyés et validés, prêts à être transmis au backend.
/// Ne vit que le temps d'une requête.
#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
impl Credentials {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Supprime les caractères de contrôle ASCII (0x00–0x1F, 0x7F)
/// puis les espaces en début et fin de chaîne.
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_ascii_control()).collect();
    stripped.trim().to_string()
}

/// Nettoie puis valide les deux champs de la requête.
/// Fonction pure : même entrée, même verdict.
pub fn validate(request: &LoginRequest) -> Result<Credentials, ValidationError> {
    let username = sanitize(&request.username);
    let password = sanitize(&request.password);

    if !is_valid_username(&username) {
        return Err(ValidationError::BadUsername);
    }
    if !is_valid_password(&password) {
        return Err(ValidationError::BadPassword);
    }

    Ok(Credentials { username, password })
}

fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len)
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }
    let (mut letter, mut digit) = (false, false);
    for c in password.chars() {
        if c.is_ascii_alphabetic() {
            letter = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if !PASSWORD_PUNCTUATION.contains(c) {
            return false;
        }
    }
    letter && digit
}
