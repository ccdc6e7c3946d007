use poise::serenity_prelude::{CreateMessage, Http, MessageFlags};
use poise::{CreateReply, ReplyHandle};
use tracing::{debug, info};

use crate::{fmt, Context, Error};

/// Characters a code fence and its newlines add around one batch.
const CODE_BLOCK_OVERHEAD: usize = 10;

pub(crate) fn log_invocation(ctx: &Context<'_>) {
    let author = ctx.author();
    info!(
        command_name = ctx.invoked_command_name(),
        command_text = ctx.invocation_string(),
        user_id = author.id.get(),
        name = author.display_name(),
        "Command Invoked"
    );
}

pub(crate) async fn public_reply<'a>(
    ctx: &Context<'a>,
    content: String,
) -> Result<ReplyHandle<'a>, Error> {
    info!(content_length = content.len(), "Sending public reply");
    Ok(ctx
        .send(
            CreateReply::new()
                .content(content)
                .ephemeral(false)
                .flags(MessageFlags::SUPPRESS_EMBEDS),
        )
        .await?)
}

pub(crate) async fn private_reply<'a>(
    ctx: &'a Context<'a>,
    content: String,
) -> Result<ReplyHandle<'a>, Error> {
    debug!(content = content, "Sending reply to user");
    Ok(ctx
        .send(
            CreateReply::new()
                .content(content)
                .ephemeral(true)
                .flags(MessageFlags::SUPPRESS_EMBEDS | MessageFlags::EPHEMERAL),
        )
        .await?)
}

pub(crate) async fn send_channel_message(
    http: &Http,
    channel_id: u64,
    content: &str,
) -> Result<(), Error> {
    info!(channel_id, content_length = content.len(), "Sending chat message");
    poise::serenity_prelude::ChannelId::new(channel_id)
        .send_message(http, CreateMessage::new().content(content))
        .await?;
    Ok(())
}

/// Splits a fixed-width text block into code-fenced messages that fit
/// under `max_length`. The title is prepended to the first message
/// only; lines are never split mid-line.
pub(crate) fn code_block_messages(title: &str, block: &str, max_length: usize) -> Vec<String> {
    let line_budget = max_length.saturating_sub(CODE_BLOCK_OVERHEAD + title.len());
    let batches = batch_contents(block.lines().collect(), line_budget);

    batches
        .into_iter()
        .enumerate()
        .map(|(i, batch)| {
            if i == 0 {
                fmt!("{title}\n```\n{batch}\n```")
            } else {
                fmt!("```\n{batch}\n```")
            }
        })
        .collect()
}

fn batch_contents(contents: Vec<&str>, max_length: usize) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current_batch = String::new();
    for content in contents {
        let separator_len = if current_batch.is_empty() { 0 } else { 1 }; // newline
        if current_batch.len() + content.len() + separator_len > max_length {
            batches.push(current_batch);
            current_batch = content.to_string();
        } else {
            if separator_len == 1 {
                current_batch.push('\n');
            }
            current_batch.push_str(content);
        }
    }
    if !current_batch.is_empty() {
        batches.push(current_batch);
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_boards_fit_in_one_fenced_message() {
        let messages = code_block_messages("title", "a\nb\nc", 200);
        assert_eq!(messages, vec!["title\n```\na\nb\nc\n```".to_string()]);
    }

    #[test]
    fn long_boards_split_on_line_boundaries() {
        let block = (0..10).map(|i| fmt!("line-{i}")).collect::<Vec<_>>().join("\n");
        let messages = code_block_messages("t", block.as_str(), 40);

        assert!(messages.len() > 1);
        for message in &messages {
            assert!(message.len() <= 40);
            assert!(message.ends_with("```"));
        }
        assert!(messages[0].starts_with("t\n```\n"));
    }
}
