pub mod d400_team_financials;
