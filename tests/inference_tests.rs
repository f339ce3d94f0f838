//! Integration tests for the goal-grounding inference engine and the
//! dialogue-command translation layer.

use craftworld::{
    jewelry_index, BackChannelAct, BeliefState, Command, ForwardAct, GoalInference,
    InferenceConfig, InferenceError, JewelryShape, GOAL_LEN,
};

use proptest::prelude::*;

// =============================================================================
// Back-channel protocol
// =============================================================================

#[test]
fn test_give_goal_command_drives_confirmation_flow() {
    let mut inference = GoalInference::default();

    // The collaborator states a complete goal in one utterance.
    let command: Command = "give_goal(gold,ruby,crown)".parse().unwrap();
    let (act, abbrevs) = command.to_evidence().unwrap();
    let confidences = vec![1.0; abbrevs.len()];

    let outcome = inference.forward_act(act, &abbrevs, &confidences).unwrap();
    let expected_goal = jewelry_index(JewelryShape::Crown, 1, 0);
    assert_eq!(
        outcome,
        (BackChannelAct::RequestConfirmation, Some(expected_goal))
    );

    // They confirm; the goal is known.
    let (act, abbrevs) = Command::GoalConfirmed.to_evidence().unwrap();
    let outcome = inference.forward_act(act, &abbrevs, &[]).unwrap();
    assert_eq!(outcome, (BackChannelAct::Done, Some(expected_goal)));
    assert_eq!(GoalInference::goal_name(expected_goal), "Gold Crown with Ruby");
}

#[test]
fn test_double_confirm_yields_done_then_inconsistent() {
    let mut inference = GoalInference::default();

    inference
        .forward_act(ForwardAct::PartOfGoal, &['S', 'J', 'B'], &[1.0, 1.0, 1.0])
        .unwrap();

    let first = inference.forward_act(ForwardAct::Confirm, &[], &[]).unwrap();
    assert_eq!(first.0, BackChannelAct::Done);
    assert!(first.1.is_some());

    let second = inference.forward_act(ForwardAct::Confirm, &[], &[]).unwrap();
    assert_eq!(second, (BackChannelAct::InconsistentAct, None));
}

#[test]
fn test_confirm_never_mutates_state_when_inconsistent() {
    let mut inference = GoalInference::default();
    inference
        .forward_act(ForwardAct::PartOfGoal, &['C'], &[1.0])
        .unwrap();

    let per_before = *inference.state().conf_per_goal();
    let not_before = *inference.state().conf_not_goal();

    let outcome = inference.forward_act(ForwardAct::Confirm, &[], &[]).unwrap();
    assert_eq!(outcome, (BackChannelAct::InconsistentAct, None));
    assert_eq!(inference.state().conf_per_goal(), &per_before);
    assert_eq!(inference.state().conf_not_goal(), &not_before);
    assert!(!inference.state().confirmed());
}

#[test]
fn test_disconfirm_resets_from_any_state() {
    // From a confirmed state.
    let mut inference = GoalInference::default();
    inference
        .forward_act(ForwardAct::PartOfGoal, &['G', 'P', 'I'], &[1.0, 1.0, 1.0])
        .unwrap();
    inference.forward_act(ForwardAct::Confirm, &[], &[]).unwrap();

    let outcome = inference
        .forward_act(ForwardAct::Disconfirm, &[], &[])
        .unwrap();
    assert_eq!(outcome, (BackChannelAct::Reset, None));
    assert_eq!(inference.belief().0, BeliefState::Uncertain);
    assert!(!inference.state().confirmed());

    // From a fresh state it is still a reset, never an error.
    let mut fresh = GoalInference::default();
    let outcome = fresh.forward_act(ForwardAct::Disconfirm, &[], &[]).unwrap();
    assert_eq!(outcome, (BackChannelAct::Reset, None));
}

#[test]
fn test_diminishing_updates_reach_no_progress() {
    let mut inference = GoalInference::new(InferenceConfig {
        certainty_threshold: 0.75,
        update_threshold: 0.1,
    });

    let first = inference
        .forward_act(ForwardAct::PartOfGoal, &['C'], &[1.0])
        .unwrap();
    assert_eq!(first, (BackChannelAct::Progress, None));

    let second = inference
        .forward_act(ForwardAct::PartOfGoal, &['C'], &[1.0])
        .unwrap();
    assert_eq!(second, (BackChannelAct::NoProgress, None));
}

#[test]
fn test_contradictory_evidence_resets() {
    let mut inference = GoalInference::default();

    // Rule out every concept in the vocabulary.
    let abbrevs: Vec<char> = craftworld::catalog::ABBREVS.iter().map(|&(a, _)| a).collect();
    let confidences = vec![1.0; abbrevs.len()];

    let outcome = inference
        .forward_act(ForwardAct::NotPartOfGoal, &abbrevs, &confidences)
        .unwrap();
    assert_eq!(outcome, (BackChannelAct::Reset, None));
    assert_eq!(inference.belief().0, BeliefState::Uncertain);
}

// =============================================================================
// Contract violations
// =============================================================================

#[test]
fn test_contract_violations_leave_state_untouched() {
    let mut inference = GoalInference::default();
    inference
        .forward_act(ForwardAct::PartOfGoal, &['D'], &[0.5])
        .unwrap();
    let snapshot = *inference.state().conf_per_goal();

    assert_eq!(
        inference.forward_act(ForwardAct::PartOfGoal, &['?'], &[1.0]),
        Err(InferenceError::UnknownAbbreviation('?'))
    );
    assert_eq!(
        inference.forward_act(ForwardAct::PartOfGoal, &['G'], &[-0.5]),
        Err(InferenceError::NonPositiveConfidence(-0.5))
    );
    assert_eq!(
        inference.forward_act(ForwardAct::PartOfGoal, &['G', 'S'], &[1.0]),
        Err(InferenceError::LengthMismatch {
            abbrevs: 2,
            confidences: 1
        })
    );

    assert_eq!(inference.state().conf_per_goal(), &snapshot);
}

// =============================================================================
// Clipping properties
// =============================================================================

fn abbrev_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(
        craftworld::catalog::ABBREVS
            .iter()
            .map(|&(a, _)| a)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn prop_net_confidence_stays_in_unit_interval(
        updates in prop::collection::vec(
            (prop::bool::ANY, abbrev_strategy(), 0.01f64..3.0),
            1..60
        )
    ) {
        let mut inference = GoalInference::default();

        for (include, abbrev, confidence) in updates {
            let act = if include {
                ForwardAct::PartOfGoal
            } else {
                ForwardAct::NotPartOfGoal
            };
            inference.forward_act(act, &[abbrev], &[confidence]).unwrap();

            let net = inference.state().net_confidence();
            for index in 0..GOAL_LEN {
                prop_assert!((0.0..=1.0).contains(&net[index]));
                prop_assert!((0.0..=1.0).contains(&inference.state().conf_per_goal()[index]));
                prop_assert!((0.0..=1.0).contains(&inference.state().conf_not_goal()[index]));
            }
        }
    }

    #[test]
    fn prop_disconfirm_is_always_a_full_reset(
        updates in prop::collection::vec(
            (abbrev_strategy(), 0.1f64..2.0),
            0..20
        )
    ) {
        let mut inference = GoalInference::default();
        for (abbrev, confidence) in updates {
            inference
                .forward_act(ForwardAct::PartOfGoal, &[abbrev], &[confidence])
                .unwrap();
        }

        let outcome = inference.forward_act(ForwardAct::Disconfirm, &[], &[]).unwrap();
        prop_assert_eq!(outcome, (BackChannelAct::Reset, None));
        prop_assert!(inference.state().conf_per_goal().iter().all(|&v| v == 0.0));
        prop_assert!(inference.state().conf_not_goal().iter().all(|&v| v == 0.0));
        prop_assert!(!inference.state().confirmed());
    }
}
