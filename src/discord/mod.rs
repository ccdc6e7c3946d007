mod advent_command;
pub(crate) mod discord_helper;

pub(crate) async fn commands() -> Vec<poise::Command<crate::Data, crate::Error>> {
    vec![advent_command::advent()]
}
