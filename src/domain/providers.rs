//! Provider catalogs offered by the scaffold prompts.
//!
//! Slugs match the identifiers baked into the template sources; the
//! provider-file rewrite replaces one slug with another, so they must stay in
//! sync with the template repository.

use crate::domain::App;

/// How the project database runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseMode {
    /// Docker-backed local database started by the scaffold.
    Local,
    /// Hosted database reached through a connection URL.
    Cloud,
}

/// Billing providers available to the web app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebBillingProvider {
    Stripe,
    LemonSqueezy,
    Polar,
}

impl WebBillingProvider {
    pub const ALL: [WebBillingProvider; 3] = [
        WebBillingProvider::Stripe,
        WebBillingProvider::LemonSqueezy,
        WebBillingProvider::Polar,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            WebBillingProvider::Stripe => "stripe",
            WebBillingProvider::LemonSqueezy => "lemon-squeezy",
            WebBillingProvider::Polar => "polar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WebBillingProvider::Stripe => "Stripe",
            WebBillingProvider::LemonSqueezy => "Lemon Squeezy",
            WebBillingProvider::Polar => "Polar",
        }
    }
}

/// Billing providers available to the mobile app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileBillingProvider {
    Revenuecat,
    Superwall,
}

impl MobileBillingProvider {
    pub const ALL: [MobileBillingProvider; 2] =
        [MobileBillingProvider::Revenuecat, MobileBillingProvider::Superwall];

    pub fn slug(self) -> &'static str {
        match self {
            MobileBillingProvider::Revenuecat => "revenuecat",
            MobileBillingProvider::Superwall => "superwall",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MobileBillingProvider::Revenuecat => "RevenueCat",
            MobileBillingProvider::Superwall => "Superwall",
        }
    }
}

/// Transactional email providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailProvider {
    Resend,
    Sendgrid,
    Postmark,
    Plunk,
    Nodemailer,
}

impl EmailProvider {
    pub const ALL: [EmailProvider; 5] = [
        EmailProvider::Resend,
        EmailProvider::Sendgrid,
        EmailProvider::Postmark,
        EmailProvider::Plunk,
        EmailProvider::Nodemailer,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            EmailProvider::Resend => "resend",
            EmailProvider::Sendgrid => "sendgrid",
            EmailProvider::Postmark => "postmark",
            EmailProvider::Plunk => "plunk",
            EmailProvider::Nodemailer => "nodemailer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmailProvider::Resend => "Resend",
            EmailProvider::Sendgrid => "Sendgrid",
            EmailProvider::Postmark => "Postmark",
            EmailProvider::Plunk => "Plunk",
            EmailProvider::Nodemailer => "Nodemailer",
        }
    }
}

/// Object storage providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageProvider {
    S3,
}

impl StorageProvider {
    pub const ALL: [StorageProvider; 1] = [StorageProvider::S3];

    pub fn slug(self) -> &'static str {
        match self {
            StorageProvider::S3 => "s3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StorageProvider::S3 => "S3",
        }
    }
}

/// Product analytics providers. Availability varies per app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnalyticsProvider {
    GoogleAnalytics,
    Mixpanel,
    OpenPanel,
    Plausible,
    Posthog,
    Umami,
    Vemetric,
    Vercel,
}

impl AnalyticsProvider {
    /// Providers the template supports for the given app.
    pub fn available_for(app: App) -> &'static [AnalyticsProvider] {
        match app {
            App::Web => &[
                AnalyticsProvider::GoogleAnalytics,
                AnalyticsProvider::Mixpanel,
                AnalyticsProvider::OpenPanel,
                AnalyticsProvider::Plausible,
                AnalyticsProvider::Posthog,
                AnalyticsProvider::Umami,
                AnalyticsProvider::Vemetric,
                AnalyticsProvider::Vercel,
            ],
            App::Mobile => &[
                AnalyticsProvider::GoogleAnalytics,
                AnalyticsProvider::Mixpanel,
                AnalyticsProvider::Posthog,
            ],
            App::Extension => &[AnalyticsProvider::GoogleAnalytics, AnalyticsProvider::Posthog],
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            AnalyticsProvider::GoogleAnalytics => "google-analytics",
            AnalyticsProvider::Mixpanel => "mixpanel",
            AnalyticsProvider::OpenPanel => "open-panel",
            AnalyticsProvider::Plausible => "plausible",
            AnalyticsProvider::Posthog => "posthog",
            AnalyticsProvider::Umami => "umami",
            AnalyticsProvider::Vemetric => "vemetric",
            AnalyticsProvider::Vercel => "vercel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalyticsProvider::GoogleAnalytics => "Google Analytics",
            AnalyticsProvider::Mixpanel => "Mixpanel",
            AnalyticsProvider::OpenPanel => "Open Panel",
            AnalyticsProvider::Plausible => "Plausible",
            AnalyticsProvider::Posthog => "PostHog",
            AnalyticsProvider::Umami => "Umami",
            AnalyticsProvider::Vemetric => "Vemetric",
            AnalyticsProvider::Vercel => "Vercel",
        }
    }
}

/// Error monitoring providers; the same set applies to every app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MonitoringProvider {
    Sentry,
    Posthog,
}

impl MonitoringProvider {
    pub const ALL: [MonitoringProvider; 2] =
        [MonitoringProvider::Sentry, MonitoringProvider::Posthog];

    pub fn slug(self) -> &'static str {
        match self {
            MonitoringProvider::Sentry => "sentry",
            MonitoringProvider::Posthog => "posthog",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MonitoringProvider::Sentry => "Sentry",
            MonitoringProvider::Posthog => "PostHog",
        }
    }
}
