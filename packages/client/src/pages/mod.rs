pub mod first_stage_result;
pub mod first_stage_vote;
pub mod game_list;
