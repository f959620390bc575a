use core::fmt::Write;

use rand::RngCore;

use crate::{view::FormKind, widget::core::WidgetCore};

impl WidgetCore {
    pub(crate) fn get_uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        let mut s = String::with_capacity(36);
        for (i, b) in bytes.iter().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                s.push('-');
            }
            let _ = write!(s, "{:02x}", b);
        }
        s
    }

    /// Token for the next submit of `form`. Reused until a submit succeeds.
    pub(crate) fn issue_submission_token(&mut self, form: FormKind) -> Option<String> {
        if !self.config.submission_tokens {
            return None;
        }
        if self.submission_tokens.get(form).is_none() {
            let token = self.get_uuid();
            *self.submission_tokens.get_mut(form) = Some(token);
        }
        self.submission_tokens.get(form).clone()
    }
}
