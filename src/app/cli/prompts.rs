//! Interactive prompt flows producing a [`ProjectPlan`].
//!
//! Provider selections are mandatory picks; the per-provider credential
//! prompts accept empty input, leaving `KEY=""` placeholders in the env files
//! for later.

use std::collections::BTreeMap;

use dialoguer::console::style;
use dialoguer::{Input, MultiSelect, Select};

use crate::config::env_registry as env_keys;
use crate::domain::{
    AnalyticsProvider, App, AppError, DatabaseMode, EmailProvider, MobileBillingProvider,
    MonitoringProvider, ProjectPlan, ProviderSelection, StorageProvider, WebBillingProvider,
};

type EnvMap = BTreeMap<String, String>;

pub(super) fn collect_plan() -> Result<ProjectPlan, AppError> {
    let name = project_name()?;
    let apps = app_selection()?;

    println!(
        "\nLet's configure it!\nYou can skip any step by pressing {}.\n",
        style("enter").bold()
    );

    let mut env = EnvMap::new();
    let database = database(&mut env)?;
    let email = email(&mut env)?;
    let billing_web = billing_web(&mut env)?;
    let billing_mobile = if apps.contains(&App::Mobile) {
        Some(billing_mobile(&mut env)?)
    } else {
        None
    };
    let storage = storage(&mut env)?;

    let mut analytics = BTreeMap::new();
    for app in &apps {
        analytics.insert(*app, analytics_for(*app, &mut env)?);
    }
    let mut monitoring = BTreeMap::new();
    for app in &apps {
        monitoring.insert(*app, monitoring_for(*app, &mut env)?);
    }

    Ok(ProjectPlan {
        name,
        apps,
        database,
        providers: ProviderSelection {
            email,
            storage,
            billing_web,
            billing_mobile,
            analytics,
            monitoring,
        },
        env,
    })
}

fn project_name() -> Result<String, AppError> {
    Input::new()
        .with_prompt("Enter your project name")
        .validate_with(|input: &String| {
            if input.trim().is_empty() { Err("Name is required!") } else { Ok(()) }
        })
        .interact_text()
        .map_err(prompt_error)
}

fn app_selection() -> Result<Vec<App>, AppError> {
    let labels: Vec<&str> = App::ALL.iter().map(|app| app.display_name()).collect();
    loop {
        let picked = MultiSelect::new()
            .with_prompt("What do you want to ship?")
            .items(&labels)
            .defaults(&[true, false, false])
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(AppError::Cancelled)?;
        let apps: Vec<App> = picked.into_iter().map(|index| App::ALL[index]).collect();
        if apps.contains(&App::Web) {
            return Ok(apps);
        }
        eprintln!(
            "You {} ship a web app, to ensure backend services work.",
            style("must").bold()
        );
    }
}

fn database(env: &mut EnvMap) -> Result<DatabaseMode, AppError> {
    let choice = select_index("How do you want to use the database?", &[
        "Local (powered by Docker)",
        "Cloud",
    ])?;
    if choice == 0 {
        return Ok(DatabaseMode::Local);
    }
    ask(env, env_keys::DATABASE_URL, "Enter your database URL")?;
    Ok(DatabaseMode::Cloud)
}

fn email(env: &mut EnvMap) -> Result<EmailProvider, AppError> {
    let provider = select("What do you want to use for emails?", &EmailProvider::ALL, |p| {
        p.label()
    })?;
    match provider {
        EmailProvider::Resend => ask(env, env_keys::RESEND_API_KEY, "Enter your Resend API key")?,
        EmailProvider::Sendgrid => {
            ask(env, env_keys::SENDGRID_API_KEY, "Enter your Sendgrid API key")?;
        }
        EmailProvider::Postmark => {
            ask(env, env_keys::POSTMARK_API_KEY, "Enter your Postmark API key")?;
        }
        EmailProvider::Plunk => ask(env, env_keys::PLUNK_API_KEY, "Enter your Plunk API key")?,
        EmailProvider::Nodemailer => {
            ask(env, env_keys::NODEMAILER_USER, "Enter your Nodemailer user")?;
            ask(env, env_keys::NODEMAILER_PASSWORD, "Enter your Nodemailer user password")?;
            ask(env, env_keys::NODEMAILER_HOST, "Enter your Nodemailer host")?;
            ask(env, env_keys::NODEMAILER_PORT, "Enter your Nodemailer port")?;
        }
    }
    Ok(provider)
}

fn billing_web(env: &mut EnvMap) -> Result<WebBillingProvider, AppError> {
    let provider =
        select("What do you want to use for web billing?", &WebBillingProvider::ALL, |p| {
            p.label()
        })?;
    match provider {
        WebBillingProvider::Stripe => {
            ask(env, env_keys::STRIPE_SECRET_KEY, "Enter your Stripe secret key")?;
            ask(env, env_keys::STRIPE_WEBHOOK_SECRET, "Enter your Stripe webhook secret")?;
        }
        WebBillingProvider::LemonSqueezy => {
            ask(env, env_keys::LEMON_SQUEEZY_STORE_ID, "Enter your Lemon Squeezy store ID")?;
            ask(env, env_keys::LEMON_SQUEEZY_API_KEY, "Enter your Lemon Squeezy API key")?;
            ask(
                env,
                env_keys::LEMON_SQUEEZY_SIGNING_SECRET,
                "Enter your Lemon Squeezy signing secret",
            )?;
        }
        WebBillingProvider::Polar => {
            ask(env, env_keys::POLAR_ACCESS_TOKEN, "Enter your Polar access token")?;
            ask(env, env_keys::POLAR_WEBHOOK_SECRET, "Enter your Polar webhook secret")?;
            ask(env, env_keys::POLAR_ORGANIZATION_SLUG, "Enter your Polar organization slug")?;
        }
    }
    Ok(provider)
}

fn billing_mobile(env: &mut EnvMap) -> Result<MobileBillingProvider, AppError> {
    let provider =
        select("What do you want to use for mobile billing?", &MobileBillingProvider::ALL, |p| {
            p.label()
        })?;
    match provider {
        MobileBillingProvider::Revenuecat => {
            ask(env, env_keys::REVENUECAT_APPLE_API_KEY, "Enter your RevenueCat Apple API key")?;
            ask(env, env_keys::REVENUECAT_GOOGLE_API_KEY, "Enter your RevenueCat Google API key")?;
            ask(env, env_keys::REVENUECAT_WEBHOOK_SECRET, "Enter your RevenueCat webhook secret")?;
            ask(env, env_keys::REVENUECAT_API_KEY, "Enter your RevenueCat API key")?;
        }
        MobileBillingProvider::Superwall => {
            ask(env, env_keys::SUPERWALL_APPLE_API_KEY, "Enter your Superwall Apple API key")?;
            ask(env, env_keys::SUPERWALL_GOOGLE_API_KEY, "Enter your Superwall Google API key")?;
            ask(env, env_keys::SUPERWALL_WEBHOOK_SECRET, "Enter your Superwall webhook secret")?;
            ask(env, env_keys::SUPERWALL_API_KEY, "Enter your Superwall API key")?;
        }
    }
    Ok(provider)
}

fn storage(env: &mut EnvMap) -> Result<StorageProvider, AppError> {
    let provider = select("What do you want to use for storage?", &StorageProvider::ALL, |p| {
        p.label()
    })?;
    match provider {
        StorageProvider::S3 => {
            ask(env, env_keys::S3_REGION, "Enter your S3 region")?;
            ask(env, env_keys::S3_BUCKET, "Enter your S3 bucket")?;
            ask(env, env_keys::S3_ENDPOINT, "Enter your S3 endpoint")?;
            ask(env, env_keys::S3_ACCESS_KEY_ID, "Enter your S3 access key ID")?;
            ask(env, env_keys::S3_SECRET_ACCESS_KEY, "Enter your S3 secret access key")?;
        }
    }
    Ok(provider)
}

fn analytics_for(app: App, env: &mut EnvMap) -> Result<AnalyticsProvider, AppError> {
    let prompt = format!("What do you want to use for {} analytics?", app.slug());
    let provider = select(&prompt, AnalyticsProvider::available_for(app), |p| p.label())?;
    match (app, provider) {
        (App::Web, AnalyticsProvider::GoogleAnalytics) => {
            ask(
                env,
                env_keys::WEB_GA_MEASUREMENT_ID,
                "Enter your Google Analytics measurement ID",
            )?;
            ask(env, env_keys::WEB_GA_SECRET, "Enter your Google Analytics secret")?;
        }
        (App::Web, AnalyticsProvider::Mixpanel) => {
            ask(env, env_keys::WEB_MIXPANEL_TOKEN, "Enter your Mixpanel token")?;
        }
        (App::Web, AnalyticsProvider::OpenPanel) => {
            ask(env, env_keys::WEB_OPEN_PANEL_CLIENT_ID, "Enter your Open Panel client ID")?;
            ask(env, env_keys::WEB_OPEN_PANEL_SECRET, "Enter your Open Panel secret")?;
        }
        (App::Web, AnalyticsProvider::Plausible) => {
            ask(env, env_keys::WEB_PLAUSIBLE_DOMAIN, "Enter your Plausible domain")?;
            ask(env, env_keys::WEB_PLAUSIBLE_HOST, "Enter your Plausible host")?;
        }
        (App::Web, AnalyticsProvider::Posthog) => {
            ask(env, env_keys::WEB_POSTHOG_KEY, "Enter your PostHog key")?;
            ask_with_default(
                env,
                env_keys::WEB_POSTHOG_HOST,
                "Enter your PostHog host",
                "https://us.posthog.com",
            )?;
        }
        (App::Web, AnalyticsProvider::Umami) => {
            ask(env, env_keys::WEB_UMAMI_HOST, "Enter your Umami host")?;
            ask(env, env_keys::WEB_UMAMI_WEBSITE_ID, "Enter your Umami website ID")?;
            ask(env, env_keys::WEB_UMAMI_API_HOST, "Enter your Umami API host")?;
            ask(env, env_keys::WEB_UMAMI_API_KEY, "Enter your Umami API key")?;
        }
        (App::Web, AnalyticsProvider::Vemetric) => {
            ask(env, env_keys::WEB_VEMETRIC_TOKEN, "Enter your Vemetric project token")?;
        }
        // Vercel analytics is wired through the platform, not env values.
        (App::Web, AnalyticsProvider::Vercel) => {}
        // Mobile Google Analytics is configured through the native config
        // plugin, not env values.
        (App::Mobile, AnalyticsProvider::GoogleAnalytics) => {}
        (App::Mobile, AnalyticsProvider::Mixpanel) => {
            ask(env, env_keys::MOBILE_MIXPANEL_TOKEN, "Enter your Mixpanel token")?;
        }
        (App::Mobile, AnalyticsProvider::Posthog) => {
            ask(env, env_keys::MOBILE_POSTHOG_KEY, "Enter your PostHog key")?;
            ask_with_default(
                env,
                env_keys::MOBILE_POSTHOG_HOST,
                "Enter your PostHog host",
                "https://us.posthog.com",
            )?;
        }
        (App::Extension, AnalyticsProvider::GoogleAnalytics) => {
            ask(
                env,
                env_keys::EXTENSION_GA_MEASUREMENT_ID,
                "Enter your Google Analytics measurement ID",
            )?;
            ask(env, env_keys::EXTENSION_GA_SECRET, "Enter your Google Analytics secret")?;
        }
        (App::Extension, AnalyticsProvider::Posthog) => {
            ask(env, env_keys::EXTENSION_POSTHOG_KEY, "Enter your PostHog key")?;
            ask_with_default(
                env,
                env_keys::EXTENSION_POSTHOG_HOST,
                "Enter your PostHog host",
                "https://us.posthog.com",
            )?;
        }
        // Remaining combinations are not offered by available_for.
        _ => {}
    }
    Ok(provider)
}

fn monitoring_for(app: App, env: &mut EnvMap) -> Result<MonitoringProvider, AppError> {
    let prompt = format!("What do you want to use for {} monitoring?", app.slug());
    let provider = select(&prompt, &MonitoringProvider::ALL, |p| p.label())?;
    match (app, provider) {
        (App::Web, MonitoringProvider::Sentry) => {
            ask(env, env_keys::WEB_SENTRY_DSN, "Enter your Sentry DSN")?;
        }
        (App::Mobile, MonitoringProvider::Sentry) => {
            ask(env, env_keys::MOBILE_SENTRY_DSN, "Enter your Sentry DSN")?;
        }
        (App::Extension, MonitoringProvider::Sentry) => {
            ask(env, env_keys::EXTENSION_SENTRY_DSN, "Enter your Sentry DSN")?;
        }
        (App::Web, MonitoringProvider::Posthog) => {
            ask(env, env_keys::WEB_POSTHOG_KEY, "Enter your PostHog key")?;
            ask_with_default(
                env,
                env_keys::WEB_POSTHOG_HOST,
                "Enter your PostHog host",
                "https://us.posthog.com",
            )?;
        }
        (App::Mobile, MonitoringProvider::Posthog) => {
            ask(env, env_keys::MOBILE_POSTHOG_KEY, "Enter your PostHog key")?;
            ask_with_default(
                env,
                env_keys::MOBILE_POSTHOG_HOST,
                "Enter your PostHog host",
                "https://us.posthog.com",
            )?;
        }
        (App::Extension, MonitoringProvider::Posthog) => {
            ask(env, env_keys::EXTENSION_POSTHOG_KEY, "Enter your PostHog key")?;
            ask_with_default(
                env,
                env_keys::EXTENSION_POSTHOG_HOST,
                "Enter your PostHog host",
                "https://us.posthog.com",
            )?;
        }
    }
    Ok(provider)
}

fn select<T: Copy>(
    prompt: &str,
    items: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Result<T, AppError> {
    let labels: Vec<&str> = items.iter().map(|item| label(item)).collect();
    select_index(prompt, &labels).map(|index| items[index])
}

fn select_index(prompt: &str, labels: &[&str]) -> Result<usize, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?
        .ok_or(AppError::Cancelled)
}

fn ask(env: &mut EnvMap, key: &str, prompt: &str) -> Result<(), AppError> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    env.insert(key.to_string(), value);
    Ok(())
}

fn ask_with_default(
    env: &mut EnvMap,
    key: &str,
    prompt: &str,
    initial: &str,
) -> Result<(), AppError> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .default(initial.to_string())
        .interact_text()
        .map_err(prompt_error)?;
    env.insert(key.to_string(), value);
    Ok(())
}

fn prompt_error(error: dialoguer::Error) -> AppError {
    AppError::Prompt(format!("prompt failed: {error}"))
}
