//! Voice session snapshot from the gateway cache.

use serenity::all::{Cache, ChannelId, ChannelType, GuildId};

use crate::model::attendance::{Participant, VoiceSession};

/// Snapshots the members connected to `channel_id`.
///
/// Returns `None` when the channel is not a voice or stage channel, or when the guild is
/// not cached.
pub fn voice_session(cache: &Cache, guild_id: GuildId, channel_id: ChannelId) -> Option<VoiceSession> {
    let guild = cache.guild(guild_id)?;

    let channel = guild.channels.get(&channel_id)?;
    if !matches!(channel.kind, ChannelType::Voice | ChannelType::Stage) {
        return None;
    }

    let states = guild.voice_states.iter().map(|(user_id, state)| {
        let tag = guild
            .members
            .get(user_id)
            .map(|member| member.user.tag())
            .or_else(|| state.member.as_ref().map(|member| member.user.tag()))
            .unwrap_or_else(|| user_id.to_string());

        (user_id.get(), state.channel_id.map(|id| id.get()), tag)
    });

    Some(VoiceSession {
        channel_id: channel_id.get(),
        members: participants_in_channel(channel_id.get(), states),
    })
}

/// Keeps the voice states pointing at `channel_id`, ordered by user ID.
pub fn participants_in_channel<I>(channel_id: u64, states: I) -> Vec<Participant>
where
    I: IntoIterator<Item = (u64, Option<u64>, String)>,
{
    let mut participants = states
        .into_iter()
        .filter(|(_, connected_to, _)| *connected_to == Some(channel_id))
        .map(|(discord_id, _, tag)| Participant { discord_id, tag })
        .collect::<Vec<_>>();

    participants.sort_by_key(|participant| participant.discord_id);
    participants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_members_of_the_channel() {
        let states = vec![
            (3, Some(10), "c#0003".to_string()),
            (1, Some(10), "a#0001".to_string()),
            (2, Some(20), "b#0002".to_string()),
            (4, None, "d#0004".to_string()),
        ];

        let participants = participants_in_channel(10, states);

        assert_eq!(
            participants,
            vec![
                Participant {
                    discord_id: 1,
                    tag: "a#0001".to_string()
                },
                Participant {
                    discord_id: 3,
                    tag: "c#0003".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_channel_has_no_participants() {
        let states = vec![(1, Some(20), "a#0001".to_string())];
        assert!(participants_in_channel(10, states).is_empty());
    }
}
