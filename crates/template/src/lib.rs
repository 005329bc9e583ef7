use std::sync::OnceLock;

mod filters;

mod error;
pub use error::*;

pub use minijinja;

#[derive(Debug, Clone, Copy, strum::AsRefStr, strum::Display)]
pub enum Template {
    #[strum(serialize = "suggest.system")]
    SuggestSystem,
    #[strum(serialize = "suggest.user")]
    SuggestUser,
    #[strum(serialize = "shownotes.system")]
    ShownotesSystem,
    #[strum(serialize = "shownotes.user")]
    ShownotesUser,
}

pub const SUGGEST_SYSTEM_TPL: &str = include_str!("../assets/suggest.system.jinja");
pub const SUGGEST_USER_TPL: &str = include_str!("../assets/suggest.user.jinja");
pub const SHOWNOTES_SYSTEM_TPL: &str = include_str!("../assets/shownotes.system.jinja");
pub const SHOWNOTES_USER_TPL: &str = include_str!("../assets/shownotes.user.jinja");

static GLOBAL_ENV: OnceLock<minijinja::Environment<'static>> = OnceLock::new();

fn init_environment() -> minijinja::Environment<'static> {
    let mut env = minijinja::Environment::new();
    env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);

    {
        env.add_template(Template::SuggestSystem.as_ref(), SUGGEST_SYSTEM_TPL)
            .unwrap();
        env.add_template(Template::SuggestUser.as_ref(), SUGGEST_USER_TPL)
            .unwrap();
        env.add_template(Template::ShownotesSystem.as_ref(), SHOWNOTES_SYSTEM_TPL)
            .unwrap();
        env.add_template(Template::ShownotesUser.as_ref(), SHOWNOTES_USER_TPL)
            .unwrap();
    }

    {
        env.add_filter("excerpt", filters::excerpt);
    }

    env
}

pub fn get_environment() -> &'static minijinja::Environment<'static> {
    GLOBAL_ENV.get_or_init(init_environment)
}

pub fn render(
    template: Template,
    ctx: &serde_json::Map<String, serde_json::Value>,
) -> Result<String, crate::Error> {
    let env = get_environment();
    let tpl = env.get_template(template.as_ref())?;

    tpl.render(ctx).map_err(Into::into)
}
