use super::*;

/// Tests identical inputs produce identical resolutions.
///
/// Expected: two runs over shuffled member order yield the same eligibility
#[tokio::test]
async fn resolution_is_stable_across_runs() -> Result<(), AppError> {
    let harness = Harness::new(
        FakeRegistry::default()
            .register(Cohort::Main, 1..=5)
            .register(Cohort::Cohort7, 3..=7),
        FakeDirectory::default()
            .characters(Cohort::Main, [1, 3, 5])
            .characters(Cohort::Cohort7, [4, 7]),
        FakeDropper::default(),
    );
    let resolver = EligibilityResolver::new(
        harness.deps.registry.as_ref(),
        harness.deps.directory.as_ref(),
        &harness.deps.character_sheets,
    );

    let members: Vec<Participant> = (1..=7).map(participant).collect();
    let mut reversed = members.clone();
    reversed.reverse();

    let first = resolver
        .resolve_characters(resolver.resolve_identities(&members).await?)
        .await?;
    let second = resolver
        .resolve_characters(resolver.resolve_identities(&reversed).await?)
        .await?;

    assert_eq!(first, second);
    assert_eq!(
        first.reward_accounts(),
        vec![
            account(Cohort::Main, 1),
            account(Cohort::Main, 3),
            account(Cohort::Main, 5)
        ]
    );
    assert_eq!(first.all_accounts().len(), 5);
    assert!(first.is_rewarded(&participant(3).tag));
    assert!(!first.is_rewarded(&participant(4).tag));

    Ok(())
}

/// Tests a cohort with no resolved address is not queried.
///
/// Expected: only the main game is queried, cohort 7 resolves empty
#[tokio::test]
async fn skips_cohort_without_resolved_addresses() -> Result<(), AppError> {
    let harness = Harness::new(
        FakeRegistry::default().register(Cohort::Main, 1..=6),
        FakeDirectory::default().characters(Cohort::Main, 1..=6),
        FakeDropper::default(),
    );
    let resolver = EligibilityResolver::new(
        harness.deps.registry.as_ref(),
        harness.deps.directory.as_ref(),
        &harness.deps.character_sheets,
    );

    let members: Vec<Participant> = (1..=6).map(participant).collect();
    let eligibility = resolver
        .resolve_characters(resolver.resolve_identities(&members).await?)
        .await?;

    let calls = harness.directory.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, main_game());
    assert!(eligibility
        .characters
        .get(&Cohort::Cohort7)
        .is_some_and(|characters| characters.accounts.is_empty()));

    Ok(())
}

/// Tests players without a character are reported per cohort.
///
/// Expected: members 4 to 6 listed without a main character
#[tokio::test]
async fn reports_members_without_character() -> Result<(), AppError> {
    let harness = Harness::new(
        FakeRegistry::default().register(Cohort::Main, 1..=6),
        FakeDirectory::default().characters(Cohort::Main, 1..=3),
        FakeDropper::default(),
    );
    let resolver = EligibilityResolver::new(
        harness.deps.registry.as_ref(),
        harness.deps.directory.as_ref(),
        &harness.deps.character_sheets,
    );

    let members: Vec<Participant> = (1..=6).map(participant).collect();
    let eligibility = resolver
        .resolve_characters(resolver.resolve_identities(&members).await?)
        .await?;

    let main = eligibility.characters.get(&Cohort::Main).unwrap();
    let expected: Vec<String> = (4..=6).map(|n| participant(n).tag).collect();
    assert_eq!(main.without_character, expected);
    assert_eq!(
        eligibility.identities.unresolved(Cohort::Cohort7).len(),
        6
    );

    Ok(())
}

#[test]
fn quorum_requires_six_members() {
    let session = |members: u8| VoiceSession {
        channel_id: CHANNEL_ID,
        members: (1..=members).map(participant).collect(),
    };

    assert!(!EligibilityResolver::has_quorum(&session(5)));
    assert!(EligibilityResolver::has_quorum(&session(6)));
}
