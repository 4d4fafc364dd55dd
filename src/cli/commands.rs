//! Command execution: one function per command group.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use cloudvault::client::endpoints::{Pagination, DEFAULT_LIMIT};
use cloudvault::client::format::format_file_size;
use cloudvault::client::search::{filter_by_name, SearchFilters, SortKey, SortOrder};
use cloudvault::client::services::admin::{DEFAULT_ACTIVITY_LIMIT, DEFAULT_LOG_LIMIT};
use cloudvault::client::{ApiClient, Config, Session, SessionState};
use cloudvault::shared::error::ApiError;
use cloudvault::shared::models::{ShareOptions, SystemSettingsUpdate, UserAction, UserSettings};

use crate::args::{
    AdminCommand, Cli, Command, FilesCommand, FilterArgs, PageArgs, ProfileCommand,
    SettingsArgs, SystemCommand, SystemSettingsArgs,
};
use crate::output;

pub async fn run(cli: Cli) -> Result<(), ApiError> {
    let config = Config::load(cli.api_url, cli.no_persist)?;
    debug!(api_url = %config.app().api_url, "configuration resolved");
    let session = Arc::new(Session::new(config.token_store()));
    let api = ApiClient::new(config.into_app(), session)?;

    match cli.command {
        Command::Login { email, password } => {
            let password = secret_or_prompt(password, "Password")?;
            let user = api.auth().login(&email, &password).await?;
            print!("Signed in as ");
            output::user(&user);
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let password = secret_or_prompt(password, "Password")?;
            let user = api.auth().register(&name, &email, &password).await?;
            print!("Account created. Signed in as ");
            output::user(&user);
        }
        Command::Logout => {
            api.auth().logout().await;
            println!("Signed out.");
        }
        Command::Whoami => match api.auth().restore().await? {
            SessionState::Authenticated(user) => output::user(&user),
            _ => return Err(ApiError::NotAuthenticated),
        },
        Command::Refresh => {
            api.auth().refresh().await?;
            println!("Token refreshed.");
        }
        Command::Files(command) => files(&api, command).await?,
        Command::Dashboard => {
            require_token(&api).await?;
            let dashboard = api.analytics().dashboard(Utc::now()).await?;
            output::dashboard(&dashboard);
        }
        Command::Profile(command) => profile(&api, command).await?,
        Command::Admin(command) => {
            require_admin(&api).await?;
            admin(&api, command).await?
        }
        Command::System(command) => system(&api, command).await?,
    }
    Ok(())
}

async fn require_token(api: &ApiClient) -> Result<(), ApiError> {
    match api.session().token().await {
        Some(_) => Ok(()),
        None => Err(ApiError::NotAuthenticated),
    }
}

/// Resolve the session and refuse non-admin users before any admin call.
async fn require_admin(api: &ApiClient) -> Result<(), ApiError> {
    match api.auth().restore().await? {
        SessionState::Authenticated(user) if user.is_admin() => Ok(()),
        SessionState::Authenticated(_) => Err(ApiError::Forbidden),
        _ => Err(ApiError::NotAuthenticated),
    }
}

fn build_filters(query: &str, args: FilterArgs, default_sort: bool) -> SearchFilters {
    let mut filters = if default_sort {
        SearchFilters::newest_first().with_query(query)
    } else {
        SearchFilters::new(query)
    };
    for file_type in args.file_types {
        filters = filters.with_file_type(file_type);
    }
    if let Some(range) = args.date_range {
        filters = filters.with_date_range(range);
    }
    if let Some(range) = args.size_range {
        filters = filters.with_size_range(range);
    }
    if args.sort_by.is_some() || args.sort_order.is_some() {
        let key = args.sort_by.or(filters.sort_by).unwrap_or(SortKey::UploadedAt);
        let order = args.sort_order.or(filters.sort_order).unwrap_or(SortOrder::Desc);
        filters = filters.sorted_by(key, order);
    }
    if args.page.is_some() || args.limit.is_some() {
        filters = filters.paged(args.page.unwrap_or(1), args.limit.unwrap_or(DEFAULT_LIMIT));
    }
    filters
}

fn pagination(paging: PageArgs, default_limit: u32) -> Pagination {
    Pagination::new(paging.page, paging.limit.unwrap_or(default_limit))
}

async fn files(api: &ApiClient, command: FilesCommand) -> Result<(), ApiError> {
    require_token(api).await?;
    let service = api.files();
    match command {
        FilesCommand::List { name, filters } => {
            // The text filter is applied here only; the list request carries none.
            let page = service.list(&build_filters("", filters, false)).await?;
            let shown = match name.as_deref() {
                Some(name) => filter_by_name(&page.files, name),
                None => page.files.clone(),
            };
            output::files_page(&page, &shown);
        }
        FilesCommand::Get { id } => output::file_detail(&service.get(&id).await?),
        FilesCommand::Search { query, filters } => {
            let page = service.search(&build_filters(&query, filters, true)).await?;
            output::files_page(&page, &page.files);
        }
        FilesCommand::Filters => output::filter_options(&service.filter_options().await?),
        FilesCommand::Upload { paths } => {
            let uploaded = service
                .upload_batch(&paths, |progress| {
                    eprintln!(
                        "[{:>3.0}%] {}/{} uploaded",
                        progress.percent(),
                        progress.completed,
                        progress.total
                    );
                })
                .await
                .map_err(|e| {
                    if let ApiError::Upload { completed, .. } = &e {
                        for item in completed {
                            println!("uploaded {}", output::file_row(item));
                        }
                    }
                    e
                })?;
            for item in &uploaded {
                println!("uploaded {}", output::file_row(item));
            }
        }
        FilesCommand::Download { id, output: path } => {
            let written = service.save_as(&id, &path).await?;
            println!("Saved {} to {}", format_file_size(written), path.display());
        }
        FilesCommand::Rename { id, name } => {
            let file = service.rename(&id, &name).await?;
            println!("Renamed to {}", file.name);
        }
        FilesCommand::Delete { id } => {
            let response = service.delete(&id).await?;
            println!("{}", or_default(&response.message, "File deleted."));
        }
        FilesCommand::Share {
            id,
            expires_in,
            password,
        } => {
            let link = service
                .share(
                    &id,
                    &ShareOptions {
                        expires_in,
                        password,
                    },
                )
                .await?;
            println!("{}", link.share_url);
        }
    }
    Ok(())
}

async fn profile(api: &ApiClient, command: ProfileCommand) -> Result<(), ApiError> {
    require_token(api).await?;
    let service = api.users();
    match command {
        ProfileCommand::Show => output::profile(&service.profile().await?),
        ProfileCommand::Update { name, email } => {
            let profile = service.update_profile(&name, &email).await?;
            println!("Profile updated.");
            output::profile(&profile);
        }
        ProfileCommand::Password => {
            let current = prompt("Current password")?;
            let new = prompt("New password")?;
            let confirmation = prompt("Confirm new password")?;
            let response = service.change_password(&current, &new, &confirmation).await?;
            println!("{}", or_default(&response.message, "Password updated."));
        }
        ProfileCommand::Settings => output::settings(&service.settings().await?),
        ProfileCommand::Set(args) => {
            let response = service.update_settings(&user_settings(args)).await?;
            println!("{}", or_default(&response.message, "Settings saved."));
        }
        ProfileCommand::Delete { yes } => {
            if !yes {
                return Err(ApiError::validation(
                    "yes",
                    "Account deletion cannot be undone; pass --yes to confirm",
                ));
            }
            service.delete_account().await?;
            println!("Account deleted.");
        }
    }
    Ok(())
}

fn user_settings(args: SettingsArgs) -> UserSettings {
    UserSettings {
        dark_mode: args.dark_mode,
        email_notifications: args.email_notifications,
        auto_backup: args.auto_backup,
        language: args.language,
        timezone: args.timezone,
    }
}

async fn admin(api: &ApiClient, command: AdminCommand) -> Result<(), ApiError> {
    let service = api.admin();
    match command {
        AdminCommand::Overview => output::admin_overview(&service.overview().await?),
        AdminCommand::Stats => output::admin_stats(&service.stats().await?),
        AdminCommand::Users { paging, search } => {
            let page = service
                .users(pagination(paging, DEFAULT_LIMIT), search.as_deref())
                .await?;
            output::users_page(&page);
        }
        AdminCommand::Activity { paging, kind } => {
            let page = service
                .activity(pagination(paging, DEFAULT_ACTIVITY_LIMIT), kind)
                .await?;
            output::activity_page(&page);
        }
        AdminCommand::Suspend { user_id } => {
            user_action(api, &user_id, UserAction::Suspend, "User suspended.").await?
        }
        AdminCommand::Activate { user_id } => {
            user_action(api, &user_id, UserAction::Activate, "User activated.").await?
        }
        AdminCommand::DeleteUser { user_id, yes } => {
            if !yes {
                return Err(ApiError::validation(
                    "yes",
                    "Deleting a user cannot be undone; pass --yes to confirm",
                ));
            }
            user_action(api, &user_id, UserAction::Delete, "User deleted.").await?
        }
        AdminCommand::Health => output::system_health(&service.system_health().await?),
        AdminCommand::Settings => output::system_settings(&service.system_settings().await?),
        AdminCommand::SetSetting(args) => {
            let response = service
                .update_system_settings(&system_settings_update(args))
                .await?;
            println!("{}", or_default(&response.message, "System settings saved."));
        }
        AdminCommand::Backup => {
            let response = service.create_backup().await?;
            println!("{}", or_default(&response.message, "Backup started."));
        }
        AdminCommand::Logs { paging, level } => {
            let page = service
                .logs(pagination(paging, DEFAULT_LOG_LIMIT), level.as_deref())
                .await?;
            output::logs(&page.logs);
        }
    }
    Ok(())
}

async fn user_action(
    api: &ApiClient,
    user_id: &str,
    action: UserAction,
    done: &str,
) -> Result<(), ApiError> {
    let response = api.admin().user_action(user_id, action).await?;
    println!("{}", or_default(&response.message, done));
    Ok(())
}

fn system_settings_update(args: SystemSettingsArgs) -> SystemSettingsUpdate {
    SystemSettingsUpdate {
        max_file_size: args.max_file_size,
        allowed_file_types: args.allowed_file_types,
        storage_quota_per_user: args.storage_quota_per_user,
        enable_registration: args.enable_registration,
        enable_file_sharing: args.enable_file_sharing,
        backup_frequency: args.backup_frequency,
    }
}

async fn system(api: &ApiClient, command: SystemCommand) -> Result<(), ApiError> {
    let service = api.system();
    match command {
        SystemCommand::Info => output::system_info(&service.info().await?),
        SystemCommand::Health => output::health_check(&service.health().await?),
        SystemCommand::Backup => {
            require_token(api).await?;
            let response = service.backup().await?;
            println!("{}", or_default(&response.message, "Backup started."));
        }
        SystemCommand::Logs { level, limit } => {
            require_token(api).await?;
            output::logs(&service.logs(level.as_deref(), limit).await?.logs);
        }
    }
    Ok(())
}

fn or_default<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}

fn secret_or_prompt(value: Option<String>, label: &str) -> Result<String, ApiError> {
    match value {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

/// Read one line from stdin. Input is not masked.
fn prompt(label: &str) -> Result<String, ApiError> {
    let mut stderr = io::stderr();
    write!(stderr, "{}: ", label)?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
