use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};

use bazi_template::{render, Template};

const MODEL: &str = "gpt-4";

/// Free-form production suggestion (titles, descriptions, ...). The context
/// map carries `prompt` and optionally `context`.
pub async fn suggest(
    client: &crate::Client,
    ctx: serde_json::Map<String, serde_json::Value>,
) -> Result<String, crate::Error> {
    complete(
        client,
        render(Template::SuggestSystem, &ctx)?,
        render(Template::SuggestUser, &ctx)?,
        500,
    )
    .await
}

/// Show-notes for an episode. The context map carries `title` and
/// `text_content`.
pub async fn generate_shownotes(
    client: &crate::Client,
    ctx: serde_json::Map<String, serde_json::Value>,
) -> Result<String, crate::Error> {
    complete(
        client,
        render(Template::ShownotesSystem, &ctx)?,
        render(Template::ShownotesUser, &ctx)?,
        800,
    )
    .await
}

async fn complete(
    client: &crate::Client,
    system: String,
    user: String,
    max_tokens: u32,
) -> Result<String, crate::Error> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(MODEL)
        .temperature(0.7)
        .max_tokens(max_tokens)
        .messages(vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()?
                .into(),
        ])
        .build()?;

    let response = client.inner.chat().create(request).await?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(crate::Error::EmptyCompletion)
}
