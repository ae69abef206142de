use std::io::{BufRead, Write};

use anyhow::{anyhow, ensure, Context, Error};

use sample_test_format::{CredentialStore, Credentials, SERVICE_NAME};

/// Ask for the username and the password, reading the answers from `input`.
pub fn ask_credentials<R: BufRead, W: Write>(
    mut input: R,
    mut prompt: W,
) -> Result<Credentials, Error> {
    let username = ask(&mut input, &mut prompt, "AtCoder username: ")?;
    ensure!(!username.is_empty(), "The username cannot be empty");
    let password = ask(&mut input, &mut prompt, "AtCoder password: ")?;
    ensure!(!password.is_empty(), "The password cannot be empty");
    Ok(Credentials { username, password })
}

fn ask<R: BufRead, W: Write>(input: &mut R, prompt: &mut W, label: &str) -> Result<String, Error> {
    write!(prompt, "{}", label)?;
    prompt.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        return Err(anyhow!("Unexpected end of input"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn main_set_login() -> Result<(), Error> {
    let store = CredentialStore::user_store();
    let stdin = std::io::stdin();
    let credentials = ask_credentials(stdin.lock(), std::io::stderr())?;
    store.save(&credentials)?;
    info!("Credentials saved in the keyring under {}", SERVICE_NAME);
    println!("Login info for {} saved", credentials.username);
    Ok(())
}
