use actix_web::web;

pub mod backend_health;
pub mod matches;
pub mod players;
pub mod stats;
pub mod teams;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Literal paths are registered before the `{id}` resources so that
    // e.g. /teams/standings never parses as a team id.
    cfg.service(
        web::scope("/teams")
            .service(teams::get_standings)
            .service(teams::upload_teams)
            .service(teams::get_all_teams)
            .service(teams::create_team)
            .service(teams::get_team)
            .service(teams::update_team)
            .service(teams::delete_team),
    );
    cfg.service(
        web::scope("/players")
            .service(players::get_top_scorers)
            .service(players::upload_players)
            .service(players::get_all_players)
            .service(players::create_player)
            .service(players::get_player)
            .service(players::update_player)
            .service(players::delete_player),
    );
    cfg.service(
        web::scope("/matches")
            .service(matches::get_all_matches)
            .service(matches::create_match)
            .service(matches::get_match_players)
            .service(matches::attach_players)
            .service(matches::update_match_player_stats)
            .service(matches::detach_player)
            .service(matches::get_match)
            .service(matches::update_match)
            .service(matches::delete_match),
    );
    cfg.service(stats::get_clean_sheets);
}
