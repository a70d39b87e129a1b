//! Static user-profile page

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Image, Label, Orientation, ScrolledWindow, Separator};

use cloud_insights_types::UserProfile;

fn heading(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class("card-title");
    label.set_halign(Align::Start);
    label
}

fn muted(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class("muted");
    label.set_halign(Align::Start);
    label
}

fn detail_row(key: &str, value: &str) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 12);
    let key_label = muted(key);
    let value_label = Label::new(Some(value));
    value_label.set_halign(Align::End);
    value_label.set_hexpand(true);
    value_label.set_wrap(true);
    row.append(&key_label);
    row.append(&value_label);
    row
}

fn stat_card(caption: &str, value: &str) -> GtkBox {
    let card = GtkBox::new(Orientation::Vertical, 4);
    card.add_css_class("card");
    card.set_hexpand(true);
    let caption_label = muted(caption);
    caption_label.add_css_class("stat-caption");
    let value_label = Label::new(Some(value));
    value_label.add_css_class("stat-value");
    value_label.set_halign(Align::Start);
    card.append(&caption_label);
    card.append(&value_label);
    card
}

/// Build the read-only profile page for the sample account
pub fn build_profile_page(profile: &UserProfile) -> ScrolledWindow {
    let content = GtkBox::new(Orientation::Horizontal, 24);
    content.set_margin_top(12);
    content.set_margin_bottom(12);
    content.set_margin_start(12);
    content.set_margin_end(12);

    // Left column: avatar and contact details
    let identity = GtkBox::new(Orientation::Vertical, 8);
    identity.set_valign(Align::Start);

    let avatar = Label::new(Some(&profile.initials()));
    avatar.add_css_class("avatar");
    avatar.set_halign(Align::Center);
    identity.append(&avatar);

    let name = Label::new(Some(&profile.name));
    name.add_css_class("page-title");
    name.set_halign(Align::Center);
    identity.append(&name);

    let role = muted(&profile.role);
    role.set_halign(Align::Center);
    identity.append(&role);

    identity.append(&Separator::new(Orientation::Horizontal));
    identity.append(&detail_row("Email", &profile.email));
    identity.append(&detail_row("Phone", &profile.phone_number));
    identity.append(&detail_row("Department", &profile.department));
    identity.append(&detail_row("Company", &profile.company));
    identity.append(&detail_row("Location", &profile.location));
    content.append(&identity);

    // Right column: statistics, skills, activity
    let details = GtkBox::new(Orientation::Vertical, 12);
    details.set_hexpand(true);

    details.append(&heading("Account Statistics"));
    let stats_row = GtkBox::new(Orientation::Horizontal, 12);
    stats_row.set_homogeneous(true);
    stats_row.append(&stat_card("Total Logins", &profile.total_logins.to_string()));
    stats_row.append(&stat_card(
        "Projects Completed",
        &profile.projects_completed.to_string(),
    ));
    stats_row.append(&stat_card("Team Size", &profile.team_size.to_string()));
    stats_row.append(&stat_card(
        "Account Age",
        &format!("{} days", profile.account_age_days()),
    ));
    details.append(&stats_row);

    details.append(&heading("Skills & Certifications"));
    let skills_row = GtkBox::new(Orientation::Horizontal, 6);
    for skill in &profile.skills {
        let chip = Label::new(Some(skill));
        chip.add_css_class("skill-chip");
        skills_row.append(&chip);
    }
    details.append(&skills_row);
    for certification in &profile.certifications {
        details.append(&muted(&format!("• {certification}")));
    }

    details.append(&heading("Recent Activity"));
    for entry in &profile.recent_activity {
        let row = GtkBox::new(Orientation::Horizontal, 8);
        row.append(&Image::from_icon_name("emblem-default-symbolic"));
        let text = GtkBox::new(Orientation::Vertical, 2);
        let action = Label::new(Some(&entry.action));
        action.set_halign(Align::Start);
        text.append(&action);
        text.append(&muted(&entry.date.format("%B %e, %Y").to_string()));
        row.append(&text);
        details.append(&row);
    }

    content.append(&details);

    let scroller = ScrolledWindow::new();
    scroller.set_child(Some(&content));
    scroller.set_vexpand(true);
    scroller
}
