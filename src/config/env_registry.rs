//! Static registry of environment variables and the env files they live in.
//!
//! Web-side secrets and `NEXT_PUBLIC_*` values go to `apps/web`, Expo values
//! to `apps/mobile`, Vite values to `apps/extension`, and the database URL to
//! the workspace root. Server-side billing secrets always live with the web
//! backend, including the ones belonging to mobile billing providers.

/// Directory (relative to the project root) holding an env file pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvTarget {
    Root,
    Web,
    Mobile,
    Extension,
}

impl EnvTarget {
    pub const ALL: [EnvTarget; 4] =
        [EnvTarget::Root, EnvTarget::Web, EnvTarget::Mobile, EnvTarget::Extension];

    pub fn dir(self) -> &'static str {
        match self {
            EnvTarget::Root => ".",
            EnvTarget::Web => "apps/web",
            EnvTarget::Mobile => "apps/mobile",
            EnvTarget::Extension => "apps/extension",
        }
    }
}

// Database
pub const DATABASE_URL: &str = "DATABASE_URL";

// Billing: web
pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub const STRIPE_WEBHOOK_SECRET: &str = "STRIPE_WEBHOOK_SECRET";
pub const LEMON_SQUEEZY_API_KEY: &str = "LEMON_SQUEEZY_API_KEY";
pub const LEMON_SQUEEZY_SIGNING_SECRET: &str = "LEMON_SQUEEZY_SIGNING_SECRET";
pub const LEMON_SQUEEZY_STORE_ID: &str = "LEMON_SQUEEZY_STORE_ID";
pub const POLAR_ACCESS_TOKEN: &str = "POLAR_ACCESS_TOKEN";
pub const POLAR_WEBHOOK_SECRET: &str = "POLAR_WEBHOOK_SECRET";
pub const POLAR_ORGANIZATION_SLUG: &str = "POLAR_ORGANIZATION_SLUG";

// Billing: mobile
pub const REVENUECAT_APPLE_API_KEY: &str = "EXPO_PUBLIC_REVENUECAT_APPLE_API_KEY";
pub const REVENUECAT_GOOGLE_API_KEY: &str = "EXPO_PUBLIC_REVENUECAT_GOOGLE_API_KEY";
pub const REVENUECAT_API_KEY: &str = "REVENUECAT_API_KEY";
pub const REVENUECAT_WEBHOOK_SECRET: &str = "REVENUECAT_WEBHOOK_SECRET";
pub const SUPERWALL_APPLE_API_KEY: &str = "EXPO_PUBLIC_SUPERWALL_APPLE_API_KEY";
pub const SUPERWALL_GOOGLE_API_KEY: &str = "EXPO_PUBLIC_SUPERWALL_GOOGLE_API_KEY";
pub const SUPERWALL_API_KEY: &str = "SUPERWALL_API_KEY";
pub const SUPERWALL_WEBHOOK_SECRET: &str = "SUPERWALL_WEBHOOK_SECRET";

// Email
pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";
pub const POSTMARK_API_KEY: &str = "POSTMARK_API_KEY";
pub const PLUNK_API_KEY: &str = "PLUNK_API_KEY";
pub const NODEMAILER_USER: &str = "NODEMAILER_USER";
pub const NODEMAILER_PASSWORD: &str = "NODEMAILER_PASSWORD";
pub const NODEMAILER_HOST: &str = "NODEMAILER_HOST";
pub const NODEMAILER_PORT: &str = "NODEMAILER_PORT";

// Storage
pub const S3_REGION: &str = "S3_REGION";
pub const S3_BUCKET: &str = "S3_BUCKET";
pub const S3_ENDPOINT: &str = "S3_ENDPOINT";
pub const S3_ACCESS_KEY_ID: &str = "S3_ACCESS_KEY_ID";
pub const S3_SECRET_ACCESS_KEY: &str = "S3_SECRET_ACCESS_KEY";

// Analytics: web
pub const WEB_GA_MEASUREMENT_ID: &str = "NEXT_PUBLIC_GOOGLE_ANALYTICS_MEASUREMENT_ID";
pub const WEB_GA_SECRET: &str = "GOOGLE_ANALYTICS_SECRET";
pub const WEB_MIXPANEL_TOKEN: &str = "NEXT_PUBLIC_MIXPANEL_TOKEN";
pub const WEB_OPEN_PANEL_CLIENT_ID: &str = "NEXT_PUBLIC_OPEN_PANEL_CLIENT_ID";
pub const WEB_OPEN_PANEL_SECRET: &str = "OPEN_PANEL_SECRET";
pub const WEB_PLAUSIBLE_DOMAIN: &str = "NEXT_PUBLIC_PLAUSIBLE_DOMAIN";
pub const WEB_PLAUSIBLE_HOST: &str = "NEXT_PUBLIC_PLAUSIBLE_HOST";
pub const WEB_POSTHOG_KEY: &str = "NEXT_PUBLIC_POSTHOG_KEY";
pub const WEB_POSTHOG_HOST: &str = "NEXT_PUBLIC_POSTHOG_HOST";
pub const WEB_UMAMI_HOST: &str = "NEXT_PUBLIC_UMAMI_HOST";
pub const WEB_UMAMI_WEBSITE_ID: &str = "NEXT_PUBLIC_UMAMI_WEBSITE_ID";
pub const WEB_UMAMI_API_HOST: &str = "UMAMI_API_HOST";
pub const WEB_UMAMI_API_KEY: &str = "UMAMI_API_KEY";
pub const WEB_VEMETRIC_TOKEN: &str = "NEXT_PUBLIC_VEMETRIC_PROJECT_TOKEN";

// Analytics: mobile
pub const MOBILE_MIXPANEL_TOKEN: &str = "EXPO_PUBLIC_MIXPANEL_TOKEN";
pub const MOBILE_POSTHOG_KEY: &str = "EXPO_PUBLIC_POSTHOG_KEY";
pub const MOBILE_POSTHOG_HOST: &str = "EXPO_PUBLIC_POSTHOG_HOST";

// Analytics: extension
pub const EXTENSION_GA_MEASUREMENT_ID: &str = "VITE_GOOGLE_ANALYTICS_MEASUREMENT_ID";
pub const EXTENSION_GA_SECRET: &str = "VITE_GOOGLE_ANALYTICS_SECRET";
pub const EXTENSION_POSTHOG_KEY: &str = "VITE_POSTHOG_KEY";
pub const EXTENSION_POSTHOG_HOST: &str = "VITE_POSTHOG_HOST";

// Monitoring
pub const WEB_SENTRY_DSN: &str = "NEXT_PUBLIC_SENTRY_DSN";
pub const MOBILE_SENTRY_DSN: &str = "EXPO_PUBLIC_SENTRY_DSN";
pub const EXTENSION_SENTRY_DSN: &str = "VITE_SENTRY_DSN";

const ROOT: &[EnvTarget] = &[EnvTarget::Root];
const WEB: &[EnvTarget] = &[EnvTarget::Web];
const MOBILE: &[EnvTarget] = &[EnvTarget::Mobile];
const EXTENSION: &[EnvTarget] = &[EnvTarget::Extension];

/// Variable name → env-file targets it must be written to.
const ENV_TABLE: &[(&str, &[EnvTarget])] = &[
    (DATABASE_URL, ROOT),
    (STRIPE_SECRET_KEY, WEB),
    (STRIPE_WEBHOOK_SECRET, WEB),
    (LEMON_SQUEEZY_API_KEY, WEB),
    (LEMON_SQUEEZY_SIGNING_SECRET, WEB),
    (LEMON_SQUEEZY_STORE_ID, WEB),
    (POLAR_ACCESS_TOKEN, WEB),
    (POLAR_WEBHOOK_SECRET, WEB),
    (POLAR_ORGANIZATION_SLUG, WEB),
    (REVENUECAT_APPLE_API_KEY, MOBILE),
    (REVENUECAT_GOOGLE_API_KEY, MOBILE),
    (REVENUECAT_API_KEY, WEB),
    (REVENUECAT_WEBHOOK_SECRET, WEB),
    (SUPERWALL_APPLE_API_KEY, MOBILE),
    (SUPERWALL_GOOGLE_API_KEY, MOBILE),
    (SUPERWALL_API_KEY, WEB),
    (SUPERWALL_WEBHOOK_SECRET, WEB),
    (RESEND_API_KEY, WEB),
    (SENDGRID_API_KEY, WEB),
    (POSTMARK_API_KEY, WEB),
    (PLUNK_API_KEY, WEB),
    (NODEMAILER_USER, WEB),
    (NODEMAILER_PASSWORD, WEB),
    (NODEMAILER_HOST, WEB),
    (NODEMAILER_PORT, WEB),
    (S3_REGION, WEB),
    (S3_BUCKET, WEB),
    (S3_ENDPOINT, WEB),
    (S3_ACCESS_KEY_ID, WEB),
    (S3_SECRET_ACCESS_KEY, WEB),
    (WEB_GA_MEASUREMENT_ID, WEB),
    (WEB_GA_SECRET, WEB),
    (WEB_MIXPANEL_TOKEN, WEB),
    (WEB_OPEN_PANEL_CLIENT_ID, WEB),
    (WEB_OPEN_PANEL_SECRET, WEB),
    (WEB_PLAUSIBLE_DOMAIN, WEB),
    (WEB_PLAUSIBLE_HOST, WEB),
    (WEB_POSTHOG_KEY, WEB),
    (WEB_POSTHOG_HOST, WEB),
    (WEB_UMAMI_HOST, WEB),
    (WEB_UMAMI_WEBSITE_ID, WEB),
    (WEB_UMAMI_API_HOST, WEB),
    (WEB_UMAMI_API_KEY, WEB),
    (WEB_VEMETRIC_TOKEN, WEB),
    (MOBILE_MIXPANEL_TOKEN, MOBILE),
    (MOBILE_POSTHOG_KEY, MOBILE),
    (MOBILE_POSTHOG_HOST, MOBILE),
    (EXTENSION_GA_MEASUREMENT_ID, EXTENSION),
    (EXTENSION_GA_SECRET, EXTENSION),
    (EXTENSION_POSTHOG_KEY, EXTENSION),
    (EXTENSION_POSTHOG_HOST, EXTENSION),
    (WEB_SENTRY_DSN, WEB),
    (MOBILE_SENTRY_DSN, MOBILE),
    (EXTENSION_SENTRY_DSN, EXTENSION),
];

/// Env-file targets where `key` must be written. Unknown keys map nowhere.
pub fn targets_for(key: &str) -> &'static [EnvTarget] {
    ENV_TABLE.iter().find(|(name, _)| *name == key).map(|(_, targets)| *targets).unwrap_or(&[])
}
