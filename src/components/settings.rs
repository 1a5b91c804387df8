//! Settings Page
//!
//! Four tabs: profile, business, notifications and preferences. Only the
//! notification switches carry state; the profile and business forms are
//! prefilled and their save buttons are inert.

use leptos::prelude::*;

use crate::models::NotificationPrefs;

const TABS: [(&str, &str); 4] = [
    ("profile", "Profile"),
    ("business", "Business"),
    ("notifications", "Notifications"),
    ("preferences", "Preferences"),
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("profile");
    let prefs = RwSignal::new(NotificationPrefs::default());

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Settings"</h1>
                    <p class="muted">"Manage your account and preferences"</p>
                </div>
            </header>

            <div class="tab-bar">
                {TABS
                    .into_iter()
                    .map(|(key, label)| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == key { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_active_tab.set(key)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match active_tab.get() {
                "business" => view! { <BusinessTab /> }.into_any(),
                "notifications" => view! { <NotificationsTab prefs=prefs /> }.into_any(),
                "preferences" => view! { <PreferencesTab /> }.into_any(),
                _ => view! { <ProfileTab /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    view! {
        <div class="tab-panel">
            <div class="card">
                <h2>"Personal Information"</h2>
                <p class="muted">"Update your personal details"</p>
                <div class="row start">
                    <span class="avatar large">"JD"</span>
                    <button class="outline">"Change Photo"</button>
                </div>
                <div class="field-grid two">
                    <label>"First Name" <input type="text" value="John" /></label>
                    <label>"Last Name" <input type="text" value="Doe" /></label>
                </div>
                <label>"Email" <input type="email" value="john.doe@example.com" /></label>
                <label>"Phone" <input type="tel" value="+1 (555) 123-4567" /></label>
                <label>
                    "Bio"
                    <textarea rows="4" placeholder="Tell clients about yourself...">
                        "Certified fitness trainer with 10+ years of experience helping clients achieve their health goals."
                    </textarea>
                </label>
                <button class="primary">"Save Changes"</button>
            </div>

            <div class="card">
                <h2>"Change Password"</h2>
                <p class="muted">"Update your password to keep your account secure"</p>
                <label>"Current Password" <input type="password" /></label>
                <label>"New Password" <input type="password" /></label>
                <label>"Confirm New Password" <input type="password" /></label>
                <button class="primary">"Update Password"</button>
            </div>
        </div>
    }
}

#[component]
fn BusinessTab() -> impl IntoView {
    view! {
        <div class="tab-panel">
            <div class="card">
                <h2>"Business Profile"</h2>
                <p class="muted">"Manage your business information"</p>
                <label>"Business Name" <input type="text" value="Fitxess Pro Training" /></label>
                <label>
                    "Business Logo"
                    <div class="row start">
                        <span class="brand-mark large">"F"</span>
                        <button class="outline">"Upload Logo"</button>
                    </div>
                </label>
                <label>"Contact Email" <input type="email" value="contact@fitxesspro.com" /></label>
                <label>"Contact Phone" <input type="tel" value="+1 (555) 987-6543" /></label>
                <label>"Website" <input type="text" value="https://fitxesspro.com" /></label>
                <label>
                    "Social Media Links"
                    <input
                        type="text"
                        placeholder="Instagram URL"
                        value="https://instagram.com/fitxesspro"
                    />
                    <input
                        type="text"
                        placeholder="Facebook URL"
                        value="https://facebook.com/fitxesspro"
                    />
                    <input type="text" placeholder="Twitter URL" />
                </label>
                <button class="primary">"Save Business Profile"</button>
            </div>
        </div>
    }
}

#[component]
fn NotificationsTab(prefs: RwSignal<NotificationPrefs>) -> impl IntoView {
    view! {
        <div class="tab-panel">
            <div class="card">
                <h2>"Notification Preferences"</h2>
                <p class="muted">"Choose what notifications you want to receive"</p>

                <h3>"Activity Notifications"</h3>
                <PrefToggle
                    label="Client Inactive"
                    hint="Get notified when a client hasn't logged in"
                    checked=Signal::derive(move || prefs.read().client_inactive)
                    on_toggle=move |on| prefs.update(|p| p.client_inactive = on)
                />
                <PrefToggle
                    label="New Referral"
                    hint="Get notified of new referral signups"
                    checked=Signal::derive(move || prefs.read().new_referral)
                    on_toggle=move |on| prefs.update(|p| p.new_referral = on)
                />
                <PrefToggle
                    label="Plan Ending"
                    hint="Get notified when client plans are expiring"
                    checked=Signal::derive(move || prefs.read().plan_ending)
                    on_toggle=move |on| prefs.update(|p| p.plan_ending = on)
                />
                <PrefToggle
                    label="New Message"
                    hint="Get notified of new client messages"
                    checked=Signal::derive(move || prefs.read().new_message)
                    on_toggle=move |on| prefs.update(|p| p.new_message = on)
                />
                <PrefToggle
                    label="Payout Update"
                    hint="Get notified about payment updates"
                    checked=Signal::derive(move || prefs.read().payout_update)
                    on_toggle=move |on| prefs.update(|p| p.payout_update = on)
                />

                <h3 class="divided">"Delivery Method"</h3>
                <PrefToggle
                    label="Email Notifications"
                    hint="Receive notifications via email"
                    checked=Signal::derive(move || prefs.read().email_notifications)
                    on_toggle=move |on| prefs.update(|p| p.email_notifications = on)
                />
                <PrefToggle
                    label="Push Notifications"
                    hint="Receive push notifications on your device"
                    checked=Signal::derive(move || prefs.read().push_notifications)
                    on_toggle=move |on| prefs.update(|p| p.push_notifications = on)
                />

                <button class="primary">"Save Preferences"</button>
            </div>
        </div>
    }
}

#[component]
fn PrefToggle(
    label: &'static str,
    hint: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="toggle-row">
            <div>
                <p>{label}</p>
                <p class="muted small">{hint}</p>
            </div>
            <input
                type="checkbox"
                class="switch"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
        </div>
    }
}

#[component]
fn PreferencesTab() -> impl IntoView {
    view! {
        <div class="tab-panel">
            <div class="card">
                <h2>"General Preferences"</h2>
                <p class="muted">"Customize your experience"</p>
                <label>
                    "Timezone"
                    <select>
                        <option value="pst" selected>"Pacific Time (PT)"</option>
                        <option value="mst">"Mountain Time (MT)"</option>
                        <option value="cst">"Central Time (CT)"</option>
                        <option value="est">"Eastern Time (ET)"</option>
                    </select>
                </label>
                <label>
                    "Measurement Units"
                    <select>
                        <option value="imperial" selected>"Imperial (lbs, ft)"</option>
                        <option value="metric">"Metric (kg, cm)"</option>
                    </select>
                </label>
                <label>
                    "Date Format"
                    <select>
                        <option value="mdy" selected>"MM/DD/YYYY"</option>
                        <option value="dmy">"DD/MM/YYYY"</option>
                        <option value="ymd">"YYYY-MM-DD"</option>
                    </select>
                </label>
                <label>
                    "Language"
                    <select>
                        <option value="en" selected>"English"</option>
                        <option value="es">"Spanish"</option>
                        <option value="fr">"French"</option>
                    </select>
                </label>
                <button class="primary">"Save Preferences"</button>
            </div>

            <div class="card">
                <h2>"Privacy & Security"</h2>
                <p class="muted">"Manage your privacy settings"</p>
                <div class="toggle-row">
                    <div>
                        <p>"Two-Factor Authentication"</p>
                        <p class="muted small">"Add an extra layer of security"</p>
                    </div>
                    <button class="outline small">"Enable"</button>
                </div>
                <div class="toggle-row">
                    <div>
                        <p>"Session History"</p>
                        <p class="muted small">"View your active sessions"</p>
                    </div>
                    <button class="outline small">"View"</button>
                </div>
                <div class="toggle-row">
                    <div>
                        <p>"Download Your Data"</p>
                        <p class="muted small">"Request a copy of your data"</p>
                    </div>
                    <button class="outline small">"Request"</button>
                </div>
                <div class="toggle-row divided">
                    <div>
                        <p class="danger">"Delete Account"</p>
                        <p class="muted small">"Permanently delete your account and data"</p>
                    </div>
                    <button class="destructive small">"Delete"</button>
                </div>
            </div>
        </div>
    }
}
