//! Plain-text rendering of API results.

use cloudvault::client::format::{
    format_duration, format_file_size, format_timestamp, storage_percent, type_badge,
};
use cloudvault::client::services::{AdminOverview, Dashboard};
use cloudvault::shared::models::{
    ActivityPage, AdminStats, FileItem, FilesPage, FilterOptions, HealthCheck, LogEntry,
    SystemHealth, SystemInfo, SystemSettings, User, UserProfile, UserSettings, UsersPage,
};

pub fn user(user: &User) {
    println!("{} <{}> ({})", user.name, user.email, user.role);
}

pub fn file_row(file: &FileItem) -> String {
    format!(
        "{:<26} {:<6} {:>10}  {:<18} {}",
        file.id,
        type_badge(&file.mime_type),
        format_file_size(file.size),
        format_timestamp(&file.created_at),
        file.name
    )
}

pub fn file_detail(file: &FileItem) {
    println!("id:        {}", file.id);
    println!("name:      {}", file.name);
    println!("type:      {}", file.mime_type);
    println!("size:      {}", format_file_size(file.size));
    println!("uploaded:  {}", format_timestamp(&file.created_at));
    if let Some(updated) = &file.updated_at {
        println!("updated:   {}", format_timestamp(updated));
    }
    if let Some(owner) = &file.owner {
        println!("owner:     {} <{}>", owner.name, owner.email);
    }
    if let Some(count) = file.download_count {
        println!("downloads: {}", count);
    }
}

pub fn files_page(page: &FilesPage, shown: &[FileItem]) {
    if shown.is_empty() {
        println!("No files found.");
        return;
    }
    for file in shown {
        println!("{}", file_row(file));
    }
    println!(
        "-- {} shown, {} total (page {})",
        shown.len(),
        page.total,
        page.page.max(1)
    );
}

pub fn filter_options(options: &FilterOptions) {
    let groups = [
        ("file types", &options.file_types),
        ("date ranges", &options.date_ranges),
        ("size ranges", &options.size_ranges),
    ];
    for (title, values) in groups {
        println!("{}:", title);
        for option in values.iter() {
            match option.count {
                Some(count) => println!("  {:<10} {} ({})", option.value, option.label, count),
                None => println!("  {:<10} {}", option.value, option.label),
            }
        }
    }
}

pub fn profile(profile: &UserProfile) {
    println!("{} <{}> ({})", profile.name, profile.email, profile.role);
    println!("member since: {}", format_timestamp(&profile.created_at));
    println!("files:        {}", profile.file_count);
    println!(
        "storage:      {} of {} ({:.1}%)",
        format_file_size(profile.storage_used),
        format_file_size(profile.storage_limit),
        storage_percent(profile.storage_used, profile.storage_limit)
    );
}

pub fn settings(settings: &UserSettings) {
    fn show<T: std::fmt::Display>(value: &Option<T>) -> String {
        value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
    println!("dark mode:           {}", show(&settings.dark_mode));
    println!("email notifications: {}", show(&settings.email_notifications));
    println!("auto backup:         {}", show(&settings.auto_backup));
    println!("language:            {}", show(&settings.language));
    println!("timezone:            {}", show(&settings.timezone));
}

pub fn dashboard(dashboard: &Dashboard) {
    let storage = &dashboard.storage;
    println!(
        "Storage: {} used, {} free of {} ({:.1}%)",
        format_file_size(storage.storage_used),
        format_file_size(storage.remaining_storage),
        format_file_size(storage.storage_limit),
        storage_percent(storage.storage_used, storage.storage_limit)
    );
    println!();
    println!("File types:");
    for stat in &dashboard.file_types.file_types {
        println!(
            "  {:<12} {:>5} files  {:>10}",
            stat.kind,
            stat.count,
            format_file_size(stat.total_size)
        );
    }
    println!();
    println!("Recent uploads (last 7 days):");
    if dashboard.recent.is_empty() {
        println!("  none");
    }
    for activity in &dashboard.recent {
        println!(
            "  {:<18} {:<10} {:>10}  {}",
            format_timestamp(&activity.timestamp),
            activity.action,
            format_file_size(activity.file_size),
            activity.file_name
        );
    }
}

pub fn admin_stats(stats: &AdminStats) {
    println!("system health:   {}", stats.system_health);
    println!(
        "users:           {} ({} active, {} new today)",
        stats.total_users, stats.active_users, stats.new_users_today
    );
    println!(
        "files:           {} ({} new today)",
        stats.total_files, stats.new_files_today
    );
    println!(
        "storage:         {} of {} ({:.1}%)",
        format_file_size(stats.storage_used),
        format_file_size(stats.storage_limit),
        storage_percent(stats.storage_used, stats.storage_limit)
    );
}

pub fn users_page(page: &UsersPage) {
    if page.users.is_empty() {
        println!("No users found.");
        return;
    }
    for user in &page.users {
        let status = if user.suspended { "suspended" } else { "active" };
        println!(
            "{:<26} {:<10} {:<6} {:>5} files {:>10}  {} <{}>",
            user.id,
            status,
            user.role,
            user.file_count,
            format_file_size(user.storage_used),
            user.name,
            user.email
        );
    }
    println!("-- {} total (page {})", page.total, page.page.max(1));
}

pub fn activity_page(page: &ActivityPage) {
    if page.activities.is_empty() {
        println!("No activity.");
        return;
    }
    for activity in &page.activities {
        println!(
            "{:<18} {:<14} {:<20} {} {}",
            format_timestamp(&activity.timestamp),
            activity.kind.as_str(),
            activity.user,
            activity.action,
            activity.details
        );
    }
    println!("-- {} total (page {})", page.total, page.page.max(1));
}

pub fn admin_overview(overview: &AdminOverview) {
    admin_stats(&overview.stats);
    println!();
    println!("Users:");
    users_page(&overview.users);
    println!();
    println!("Recent activity:");
    activity_page(&overview.activity);
}

pub fn system_health(health: &SystemHealth) {
    println!("status:             {}", health.status);
    println!("uptime:             {}", format_duration(health.uptime));
    println!("memory usage:       {:.1}%", health.memory_usage);
    println!("disk usage:         {:.1}%", health.disk_usage);
    println!("active connections: {}", health.active_connections);
    println!("last backup:        {}", format_timestamp(&health.last_backup));
}

pub fn system_settings(settings: &SystemSettings) {
    println!("max file size:          {}", format_file_size(settings.max_file_size));
    println!("storage quota per user: {}", format_file_size(settings.storage_quota_per_user));
    println!("registration enabled:   {}", settings.enable_registration);
    println!("file sharing enabled:   {}", settings.enable_file_sharing);
    println!("backup frequency:       {}", settings.backup_frequency);
    println!("allowed file types:     {}", settings.allowed_file_types.join(", "));
}

pub fn logs(entries: &[LogEntry]) {
    if entries.is_empty() {
        println!("No log entries.");
        return;
    }
    for entry in entries {
        println!(
            "{:<18} {:<5} [{}] {}",
            format_timestamp(&entry.timestamp),
            entry.level.to_uppercase(),
            entry.service,
            entry.message
        );
    }
}

pub fn system_info(info: &SystemInfo) {
    println!("version:      {} ({})", info.version, info.environment);
    println!("uptime:       {}", format_duration(info.uptime));
    println!("runtime:      {}", info.node_version);
    println!("platform:     {} {}", info.platform, info.architecture);
    println!(
        "memory:       {} free of {}",
        format_file_size(info.free_memory),
        format_file_size(info.total_memory)
    );
    println!("cpu usage:    {:.1}%", info.cpu_usage);
}

pub fn health_check(health: &HealthCheck) {
    println!(
        "status: {} ({:.0} ms)",
        format!("{:?}", health.status).to_lowercase(),
        health.response_time
    );
    for (name, state) in health.services.entries() {
        println!("  {:<9} {}", name, format!("{:?}", state).to_lowercase());
    }
}
