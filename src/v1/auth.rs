/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Login flows.
//!
//! The challenge-response login never sends the password. The service hands out a salt and
//! a one time challenge and the client answers with
//! `SHA-256(challenge || SHA-256(salt || password))`.
use crate::v1::Client;
use crate::v1::errors::ZenfolioError;
use crate::v1::macros::params;
use log::debug;
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Salt and challenge handed out by `GetChallenge`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AuthChallenge {
    #[serde(rename = "PasswordSalt")]
    pub password_salt: Vec<u8>,

    #[serde(rename = "Challenge")]
    pub challenge: Vec<u8>,
}

impl AuthChallenge {
    /// Proof of knowing `password` for this challenge
    pub fn proof(&self, password: &str) -> Vec<u8> {
        let password_hash = Sha256::new()
            .chain_update(&self.password_salt)
            .chain_update(password.as_bytes())
            .finalize();
        Sha256::new()
            .chain_update(&self.challenge)
            .chain_update(password_hash)
            .finalize()
            .to_vec()
    }
}

impl Client {
    /// Requests a login challenge for the configured user
    pub fn get_challenge(&self) -> Result<AuthChallenge, ZenfolioError> {
        let username = self.username("GetChallenge")?;
        self.call_as("GetChallenge", params![username])
    }

    /// Logs in with the challenge-response handshake and keeps the token for later calls.
    ///
    /// Does nothing when a token is already held unless `force` is set.
    pub fn authenticate(&mut self, force: bool) -> Result<String, ZenfolioError> {
        if let (Some(token), false) = (self.token(), force) {
            return Ok(token.to_string());
        }
        let challenge = self.get_challenge()?;
        let proof = challenge.proof(&self.auth().password);
        let token: String =
            self.call_as("Authenticate", params![challenge.challenge, proof])?;
        debug!("Authenticated {}", self.auth().username);
        self.set_token(token.clone());
        Ok(token)
    }

    /// Logs in by sending the username and password as is
    pub fn authenticate_plain(&mut self) -> Result<String, ZenfolioError> {
        let username = self.username("AuthenticatePlain")?;
        let token: String = self.call_as(
            "AuthenticatePlain",
            params![username, self.auth().password],
        )?;
        self.set_token(token.clone());
        Ok(token)
    }

    /// Obtains a visitor token, no account needed
    pub fn authenticate_visitor(&mut self) -> Result<String, ZenfolioError> {
        let visitor_key = self.get_visitor_key()?;
        let token: String = self.call_as("AuthenticateVisitor", params![visitor_key])?;
        self.set_token(token.clone());
        Ok(token)
    }

    pub fn get_visitor_key(&self) -> Result<String, ZenfolioError> {
        self.call_as("GetVisitorKey", params![])
    }
}
