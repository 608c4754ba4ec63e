//! Duel system integration tests
//!
//! These run the full construct/attach/equip/resolve flow through the
//! public API, minus the timed progression sleeps.

use armiger::battle::BattleOutcome;
use armiger::character::{Character, Role};
use armiger::items::{ItemType, CATALOG};

#[test]
fn test_fully_statted_knight_sweeps_the_catalog() {
    // Strength 10 / agility 7 meets every catalog requirement
    let mut knight = Character::new("Knight", Role::Player, 10, 7);
    knight.attach_equip_check(Character::can_equip);
    knight.equip_all_items();

    assert_eq!(knight.equipped_count(), 7);
    let kinds: Vec<ItemType> = knight.equipped().iter().map(|i| i.kind).collect();
    let catalog_kinds: Vec<ItemType> = CATALOG.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, catalog_kinds);
}

#[test]
fn test_zero_statted_knight_equips_nothing() {
    let mut knight = Character::new("Knight", Role::Player, 0, 0);
    knight.attach_equip_check(Character::can_equip);
    knight.equip_all_items();
    assert_eq!(knight.equipped_count(), 0);
}

#[test]
fn test_geared_and_statted_player_beats_a_weak_demon() {
    // Player: 20 total stats, full catalog. Demon: 10 total, 3 items
    // (Bracer, Back, Legs are the only items 5/5 qualifies for).
    let mut player = Character::new("Knight", Role::Player, 10, 10);
    let mut enemy = Character::new("Demon", Role::Enemy, 5, 5);
    player.attach_equip_check(Character::can_equip);
    enemy.attach_equip_check(Character::can_equip);

    player.equip_all_items();
    enemy.equip_all_items();
    assert_eq!(player.equipped_count(), 7);
    assert_eq!(enemy.equipped_count(), 3);

    assert_eq!(player.resolve_battle(&enemy), BattleOutcome::ChallengerWins);
    // Narration path: must not mutate either side
    player.start_battle(&enemy);
    assert_eq!(player.equipped_count(), 7);
    assert_eq!(enemy.equipped_count(), 3);
}

#[test]
fn test_two_underpowered_fighters_draw_at_the_threshold() {
    // Both totals sit below floor(0.8 * 17) = 13
    let mut player = Character::new("Knight", Role::Player, 3, 2);
    let mut enemy = Character::new("Demon", Role::Enemy, 3, 3);
    player.attach_equip_check(Character::can_equip);
    enemy.attach_equip_check(Character::can_equip);

    player.equip_all_items();
    enemy.equip_all_items();
    // Neither qualifies for anything, so the count comparison cannot
    // decide the fight
    assert_eq!(player.equipped_count(), 0);
    assert_eq!(enemy.equipped_count(), 0);

    assert_eq!(
        player.resolve_battle(&enemy),
        BattleOutcome::Underpowered { required: 13 }
    );
}

#[test]
fn test_outgeared_weak_player_loses() {
    let mut player = Character::new("Knight", Role::Player, 2, 2);
    let mut enemy = Character::new("Demon", Role::Enemy, 7, 5);
    player.attach_equip_check(Character::can_equip);
    enemy.attach_equip_check(Character::can_equip);

    player.equip_all_items();
    enemy.equip_all_items();
    assert_eq!(player.equipped_count(), 0);
    assert_eq!(enemy.equipped_count(), 6);

    assert_eq!(player.resolve_battle(&enemy), BattleOutcome::OpponentWins);
}

#[test]
fn test_repeated_equip_passes_never_grow_the_set() {
    let mut knight = Character::new("Knight", Role::Player, 7, 5);
    knight.attach_equip_check(Character::can_equip);
    knight.equip_all_items();
    let once = knight.equipped().to_vec();
    knight.equip_all_items();
    knight.equip_all_items();
    assert_eq!(knight.equipped(), once.as_slice());
}

#[tokio::test(start_paused = true)]
async fn test_full_session_flow_without_real_delays() {
    // Mirrors the binary's control flow: initial pass, progression,
    // enemy pass, battle.
    let mut player = Character::new("Knight", Role::Player, 5, 2);
    let mut enemy = Character::new("Demon", Role::Enemy, 4, 4);
    player.attach_equip_check(Character::can_equip);
    enemy.attach_equip_check(Character::can_equip);

    player.equip_all_items();
    let before = player.equipped_count();

    player.increase_stats().await;
    assert_eq!(player.total_stats(), 17);
    assert!(player.equipped_count() >= before);

    enemy.equip_all_items();
    // 17 total clears the threshold; 10/7 clears every item requirement,
    // while 4/4 only reaches the Back (2/4)
    assert_eq!(player.equipped_count(), 7);
    assert_eq!(enemy.equipped_count(), 1);
    assert_eq!(player.resolve_battle(&enemy), BattleOutcome::ChallengerWins);

    player.detach_equip_check();
    enemy.detach_equip_check();
}
