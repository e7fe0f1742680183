//! # Interactive Session
//!
//! Hosts a [`FormState`] behind a line-oriented prompt. The session plays
//! the role of the interaction container: it renders the form, applies
//! edits, and binds its start action ([`START_TEXT`]) to
//! [`credoffer_client::submit`]. Submission errors are shown to the user and
//! the session carries on with the form unchanged.
//!
//! ## Commands
//!
//! ```text
//! type <TYPE>            select the credential type
//! name <text>            set the credential name
//! new <label>            type a label into the new-claim input
//! add [label]            add a claim from the new-claim input (or <label>)
//! set <id|field> <text>  set a claim value ("quote" fields with spaces)
//! rm <id|field>          remove a claim (document claims are protected)
//! render <mode>          set the render mode
//! show                   render the form
//! preview                print the request body
//! send                   submit the offer
//! help                   list commands
//! quit                   leave the session
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use credoffer_client::{submit, OfferRequest, ServiceClient};
use credoffer_form::{CredentialType, FormState, FormView, RowId};

use crate::send::write_response;

/// Label of the session's start action.
pub const START_TEXT: &str = "Send Credential";

const PROMPT: &str = "> ";

const HELP: &str = "\
commands:
  type <TYPE>            select the credential type
  name <text>            set the credential name
  new <label>            type a label into the new-claim input
  add [label]            add a claim from the new-claim input (or <label>)
  set <id|field> <text>  set a claim value; quote fields with spaces:
                         set \"birth Date\" 1990-01-01
  rm <id|field>          remove a claim
  render <mode>          set the render mode
  show                   render the form
  preview                print the request body
  send                   submit the offer
  help                   list commands
  quit                   leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Type(&'a str),
    Name(&'a str),
    New(&'a str),
    Add(Option<&'a str>),
    Set { target: &'a str, value: &'a str },
    Remove(&'a str),
    Render(&'a str),
    Show,
    Preview,
    Send,
    Help,
    Quit,
}

impl<'a> Command<'a> {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &'a str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (line, ""),
        };
        let required = |what: &str| -> Result<&'a str, String> {
            if rest.is_empty() {
                Err(format!("`{head}` needs {what}"))
            } else {
                Ok(rest)
            }
        };

        let cmd = match head {
            "type" => Self::Type(required("a credential type")?),
            "name" => Self::Name(rest),
            "new" => Self::New(rest),
            "add" => Self::Add((!rest.is_empty()).then_some(rest)),
            "set" => {
                let (target, value) = split_target(required("a claim and a value")?)?;
                Self::Set { target, value }
            }
            "rm" => Self::Remove(required("a claim")?),
            "render" => Self::Render(required("a render mode")?),
            "show" => Self::Show,
            "preview" => Self::Preview,
            "send" => Self::Send,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command `{other}`; try `help`")),
        };
        Ok(Some(cmd))
    }
}

/// Split `<target> <value>`, where a target wrapped in `"` may hold spaces.
fn split_target(rest: &str) -> Result<(&str, &str), String> {
    if let Some(quoted) = rest.strip_prefix('"') {
        let (target, value) = quoted
            .split_once('"')
            .ok_or_else(|| format!("unterminated quote in `{rest}`"))?;
        return Ok((target, value.trim_start()));
    }
    Ok(match rest.split_once(char::is_whitespace) {
        Some((target, value)) => (target, value.trim_start()),
        None => (rest, ""),
    })
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive editing session over one credential offer form.
#[derive(Debug)]
pub struct Session {
    form: FormState,
    client: ServiceClient,
}

impl Session {
    /// Start a session with a fresh form.
    pub fn new(client: ServiceClient) -> Self {
        Self {
            form: FormState::new(),
            client,
        }
    }

    /// The form being edited.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", FormView::of(&self.form))?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if self.handle(&line, out).await? == Flow::Quit {
                break;
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Apply one input line.
    pub async fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let cmd = match Command::parse(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(Flow::Continue),
            Err(msg) => {
                writeln!(out, "error: {msg}")?;
                return Ok(Flow::Continue);
            }
        };
        tracing::trace!(?cmd, "session command");

        match cmd {
            Command::Type(raw) => match raw.parse::<CredentialType>() {
                Ok(t) => self.form.set_credential_type(t),
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Name(name) => self.form.set_name(name),
            Command::New(label) => self.form.set_pending_label(label),
            Command::Add(label) => {
                if let Some(label) = label {
                    self.form.set_pending_label(label);
                }
                match self.form.add_pending_row() {
                    Some(id) => writeln!(out, "added {id}")?,
                    None => writeln!(out, "error: the new claim needs a label")?,
                }
            }
            Command::Set { target, value } => match self.resolve(target) {
                Some(id) => {
                    self.form.update_row(&id, value);
                }
                None => writeln!(out, "error: no claim `{target}`")?,
            },
            Command::Remove(target) => match self.resolve(target) {
                Some(id) if id.is_protected() => {
                    let credential_type = self.form.credential_type();
                    writeln!(out, "error: `{target}` is required by {credential_type}")?;
                }
                Some(id) => {
                    self.form.remove_row(&id);
                }
                None => writeln!(out, "error: no claim `{target}`")?,
            },
            Command::Render(mode) => self.form.set_render_as(mode),
            Command::Show => writeln!(out, "{}", FormView::of(&self.form))?,
            Command::Preview => {
                let body = serde_json::to_string_pretty(&OfferRequest::from_form(&self.form))
                    .context("failed to render request body")?;
                writeln!(out, "{body}")?;
            }
            Command::Send => self.start(out).await?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// The start action: submit the form and report the outcome.
    async fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "{START_TEXT}...")?;
        match submit(&self.form, &self.client).await {
            Ok(resp) => write_response(out, &resp)?,
            Err(e) => {
                tracing::error!("credential offer failed: {e}");
                writeln!(out, "error: {e}")?;
            }
        }
        Ok(())
    }

    /// Resolve a row by id, falling back to the first row with that label.
    fn resolve(&self, target: &str) -> Option<RowId> {
        let id = RowId::from(target);
        if self.form.row(&id).is_some() {
            return Some(id);
        }
        self.form.row_by_field_name(target).map(|r| r.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credoffer_client::ServiceConfig;

    fn offline_session() -> Session {
        Session::new(ServiceClient::new(ServiceConfig::local_mock(1).unwrap()).unwrap())
    }

    async fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(
            Command::parse("new birth Date").unwrap(),
            Some(Command::New("birth Date"))
        );
        assert_eq!(Command::parse("add").unwrap(), Some(Command::Add(None)));
        assert_eq!(
            Command::parse("set seat  12A row 3").unwrap(),
            Some(Command::Set {
                target: "seat",
                value: "12A row 3"
            })
        );
        assert_eq!(
            Command::parse("set seat").unwrap(),
            Some(Command::Set {
                target: "seat",
                value: ""
            })
        );
        assert_eq!(
            Command::parse(r#"set "birth Date" 1990-01-01"#).unwrap(),
            Some(Command::Set {
                target: "birth Date",
                value: "1990-01-01"
            })
        );
        assert!(Command::parse(r#"set "birth Date 1990"#).is_err());
        assert_eq!(Command::parse("name").unwrap(), Some(Command::Name("")));
        assert!(Command::parse("type").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[tokio::test]
    async fn edits_apply_to_form() {
        let mut session = offline_session();
        let out = run_script(
            &mut session,
            "type ProofOfTicketDemo\nname Festival\nnew seat\nadd\nset seat 12A\nrender card\n",
        )
        .await;
        let form = session.form();
        assert_eq!(form.credential_type(), CredentialType::ProofOfTicketDemo);
        assert_eq!(form.name(), "Festival");
        assert_eq!(form.render_as(), "card");
        assert_eq!(form.pending_label(), "");
        assert_eq!(form.claims()["seat"], "12A");
        assert!(out.contains("added "));
    }

    #[tokio::test]
    async fn quoted_field_with_spaces_is_set() {
        let mut session = offline_session();
        let out = run_script(&mut session, "add birth Date\nset \"birth Date\" 1990-01-01\n").await;
        assert!(!out.contains("error"));
        assert_eq!(session.form().claims()["birthDate"], "1990-01-01");
    }

    #[tokio::test]
    async fn add_without_label_reports_error() {
        let mut session = offline_session();
        let out = run_script(&mut session, "add\n").await;
        assert!(out.contains("error: the new claim needs a label"));
        assert_eq!(session.form().rows().len(), 3);
    }

    #[tokio::test]
    async fn document_rows_cannot_be_removed() {
        let mut session = offline_session();
        let out = run_script(&mut session, "rm photo\nadd seat\nrm seat\n").await;
        assert!(out.contains("error: `photo` is required by ProofOfIdCredentialDemo"));
        assert_eq!(session.form().rows().len(), 3);
    }

    #[tokio::test]
    async fn unknown_type_keeps_form() {
        let mut session = offline_session();
        let out = run_script(&mut session, "type Passport\n").await;
        assert!(out.contains("error: unknown credential type: Passport"));
        assert_eq!(
            session.form().credential_type(),
            CredentialType::ProofOfIdCredentialDemo
        );
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let mut session = offline_session();
        run_script(&mut session, "quit\nname ignored\n").await;
        assert_eq!(session.form().name(), "");
    }

    #[tokio::test]
    async fn preview_prints_request_body() {
        let mut session = offline_session();
        let out = run_script(&mut session, "set givenName Ada\npreview\n").await;
        assert!(out.contains("\"givenName\": \"Ada\""));
        assert!(out.contains("\"type\": \"ProofOfIdCredentialDemo\""));
    }

    #[tokio::test]
    async fn send_failure_is_reported_and_session_continues() {
        let mut session = offline_session();
        let out = run_script(
            &mut session,
            "type ProofOfTicketDemo\nsend\nname after\n",
        )
        .await;
        assert!(out.contains("Send Credential..."));
        assert!(out.contains("error: HTTP error calling POST /rpc/genericCredentialOffer"));
        assert_eq!(session.form().name(), "after");
    }
}
