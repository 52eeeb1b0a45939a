// The two paste services. Each variant owns its endpoint (and key) and knows
// how to shape the request and read the status code that comes back.

use crate::api::{Endpoints, Transport};
use crate::config::Config;
use crate::error::{PasteError, Result};

/// Note attached to a paste.rs 206 response.
pub const TRUNCATED_NOTE: &str = "paste truncated, too large";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Map a `--private` answer. Only `yes` (any case) is private; every other
    /// value, including `true` or `1`, falls back to public.
    pub fn from_flag(flag: &str) -> Self {
        if flag.eq_ignore_ascii_case("yes") {
            return Visibility::Private;
        }
        if !flag.eq_ignore_ascii_case("no") {
            tracing::debug!(flag, "unrecognised private flag, treating as public");
        }
        Visibility::Public
    }

    /// Value of pastebin's `api_paste_private` field.
    pub fn pastebin_code(self) -> &'static str {
        match self {
            Visibility::Public => "0",
            Visibility::Private => "2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    pub title: String,
    pub body: String,
    pub visibility: Visibility,
    pub expire: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteResult {
    Created { url: String },
    PartiallyCreated { url: String, note: String },
    Failed { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pastebin {
    pub endpoint: String,
    pub api_key: String,
}

impl Pastebin {
    pub fn submit(&self, req: &PasteRequest, transport: &dyn Transport) -> Result<PasteResult> {
        let form = [
            ("api_dev_key", self.api_key.as_str()),
            ("api_option", "paste"),
            ("api_paste_code", req.body.as_str()),
            ("api_paste_name", req.title.as_str()),
            ("api_paste_private", req.visibility.pastebin_code()),
            ("api_paste_expire_date", req.expire.as_str()),
            ("api_paste_format", req.format.as_str()),
        ];
        let reply = transport.post_form(&self.endpoint, &form)?;
        Ok(match reply.status {
            200 => PasteResult::Created {
                url: reply.body.trim().to_string(),
            },
            status => PasteResult::Failed {
                status,
                body: reply.body,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pasters {
    pub base_url: String,
}

impl Pasters {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Public URL of a paste on this service.
    pub fn paste_url(&self, paste_id: &str) -> String {
        format!("{}/{}", self.base(), paste_id)
    }

    /// paste.rs takes only the content; title, visibility, expiry and format
    /// are dropped.
    pub fn submit(&self, req: &PasteRequest, transport: &dyn Transport) -> Result<PasteResult> {
        let url = format!("{}/", self.base());
        let reply = transport.post_bytes(&url, req.body.as_bytes().to_vec())?;
        Ok(match reply.status {
            201 => PasteResult::Created {
                url: reply.body.trim().to_string(),
            },
            206 => PasteResult::PartiallyCreated {
                url: reply.body.trim().to_string(),
                note: TRUNCATED_NOTE.to_string(),
            },
            status => PasteResult::Failed {
                status,
                body: reply.body,
            },
        })
    }

    /// Delete a paste by id and return its URL. The service does not check
    /// ownership: anyone holding the id can delete it.
    pub fn delete(&self, paste_id: &str, transport: &dyn Transport) -> Result<String> {
        let url = self.paste_url(paste_id);
        let reply = transport.delete(&url)?;
        if reply.status == 200 {
            Ok(url)
        } else {
            Err(PasteError::DeleteFailed {
                url,
                status: reply.status,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Pastebin(Pastebin),
    Pasters(Pasters),
}

impl Backend {
    pub fn from_config(config: &Config, endpoints: &Endpoints) -> Self {
        match config {
            Config::Pastebin { api_key } => Backend::Pastebin(Pastebin {
                endpoint: endpoints.pastebin.clone(),
                api_key: api_key.clone(),
            }),
            Config::Pasters => Backend::Pasters(Pasters::new(endpoints.pasters.clone())),
        }
    }

    /// Human name used in progress messages.
    pub fn service_name(&self) -> &'static str {
        match self {
            Backend::Pastebin(_) => "Pastebin",
            Backend::Pasters(_) => "paste.rs",
        }
    }

    pub fn submit(&self, req: &PasteRequest, transport: &dyn Transport) -> Result<PasteResult> {
        tracing::debug!(service = self.service_name(), bytes = req.body.len(), "submitting paste");
        match self {
            Backend::Pastebin(b) => b.submit(req, transport),
            Backend::Pasters(b) => b.submit(req, transport),
        }
    }
}
