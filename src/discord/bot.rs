use crate::discord::command;
use crate::handler::CommandHandler;
use serenity::all::{
    Command, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, EventHandler, GuildId, Interaction, Ready,
};
use serenity::async_trait;
use tracing::{debug, error, info};

/// Bridges serenity's gateway callbacks to a [`CommandHandler`].
pub struct Bot {
    handler: CommandHandler,
    guild_id: Option<GuildId>,
}

impl Bot {
    pub(super) fn new(handler: CommandHandler, guild_id: Option<GuildId>) -> Self {
        Bot { handler, guild_id }
    }

    async fn register_commands(&self, ctx: &Context) {
        let registered = match self.guild_id {
            Some(guild_id) => {
                guild_id
                    .create_command(&ctx.http, command::definition())
                    .await
            }
            None => Command::create_global_command(&ctx.http, command::definition()).await,
        };
        match registered {
            Ok(cmd) => info!("registered command '{}'", cmd.name),
            Err(err) => error!("cannot create '{}' command: {:?}", command::NAME, err),
        }
    }

    async fn respond(&self, ctx: &Context, interaction: &CommandInteraction) {
        let invoker = command::invoker(
            interaction.member.as_ref().map(|m| m.user.name.as_str()),
            &interaction.user.name,
        );
        let invocation = command::invocation(
            interaction
                .data
                .options
                .iter()
                .map(|o| (o.name.as_str(), o.value.as_str())),
            invoker,
        );

        let reply = self.handler.handle(&invocation).await;
        if !reply.is_success() {
            debug!("interaction {} declined: {reply:?}", interaction.id);
        }
        let message = CreateInteractionResponseMessage::new().content(reply.content());
        if let Err(err) = interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            error!("failed to reply to interaction {}: {:?}", interaction.id, err);
        }
    }
}

#[async_trait]
impl EventHandler for Bot {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "bot is up as {}, handing out addresses on {}",
            ready.user.name,
            self.handler.domain()
        );
        self.register_commands(&ctx).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(interaction) = interaction else {
            return;
        };
        if interaction.data.name != command::NAME {
            debug!("ignoring unknown command '{}'", interaction.data.name);
            return;
        }
        self.respond(&ctx, &interaction).await;
    }
}
