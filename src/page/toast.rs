//! Transient notification toast.
//!
//! The controller keeps at most one toast alive in an `Option` slot.
//! Showing a new one overwrites the slot, which also restarts the lifetime,
//! so a stale auto-hide can never kill a fresh toast.

use std::time::{Duration, Instant};

use egui::Color32;

/// How long a toast stays up.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);
/// Fade-out tail at the end of the lifetime.
const FADE_OUT: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

impl ToastSeverity {
    /// Accent color for the toast edge and title.
    pub fn accent(&self) -> Color32 {
        match self {
            ToastSeverity::Success => Color32::from_rgb(46, 160, 67),
            ToastSeverity::Error => Color32::from_rgb(205, 60, 60),
        }
    }
}

/// A single notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: ToastSeverity,
    shown_at: Instant,
}

impl Toast {
    pub fn new(title: String, message: String, severity: ToastSeverity, now: Instant) -> Self {
        Self {
            title,
            message,
            severity,
            shown_at: now,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_LIFETIME
    }

    /// When the auto-hide is due.
    pub fn expires_at(&self) -> Instant {
        self.shown_at + TOAST_LIFETIME
    }

    /// 1.0 for most of the lifetime, ramping to 0.0 over the final fade.
    pub fn opacity(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.shown_at);
        if age >= TOAST_LIFETIME {
            return 0.0;
        }
        let remaining = TOAST_LIFETIME - age;
        if remaining >= FADE_OUT {
            1.0
        } else {
            remaining.as_secs_f32() / FADE_OUT.as_secs_f32()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast_at(t: Instant) -> Toast {
        Toast::new(
            "Message sent".to_string(),
            "Thanks for reaching out.".to_string(),
            ToastSeverity::Success,
            t,
        )
    }

    #[test]
    fn test_expiry_boundary() {
        let t0 = Instant::now();
        let toast = toast_at(t0);

        assert!(!toast.expired(t0));
        assert!(!toast.expired(t0 + Duration::from_millis(4_999)));
        assert!(toast.expired(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_opacity_ramp() {
        let t0 = Instant::now();
        let toast = toast_at(t0);

        assert!((toast.opacity(t0) - 1.0).abs() < 1e-6);
        assert!((toast.opacity(t0 + Duration::from_secs(4)) - 1.0).abs() < 1e-6);

        let fading = toast.opacity(t0 + Duration::from_millis(4_800));
        assert!(fading > 0.0 && fading < 1.0);

        assert_eq!(toast.opacity(t0 + Duration::from_secs(5)), 0.0);
        assert_eq!(toast.opacity(t0 + Duration::from_secs(9)), 0.0);
    }
}
