// ABOUTME: Challenge route handlers for listing, joining, and progress updates
// ABOUTME: Completion grants the challenge XP reward exactly once via atomic increment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Challenge routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    database_plugins::DatabaseProvider,
    errors::AppError,
    models::{Challenge, ChallengeParticipant},
    server::ServerResources,
};

/// A challenge with its participant count
#[derive(Debug, Serialize)]
pub struct ChallengeSummary {
    /// The challenge
    #[serde(flatten)]
    pub challenge: Challenge,
    /// Number of participants
    pub participants: i64,
}

/// Challenge listing response
#[derive(Debug, Serialize)]
pub struct ChallengeListResponse {
    /// Active challenges, newest first
    pub challenges: Vec<ChallengeSummary>,
}

/// Participant response
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    /// The caller's participant record
    pub participant: ChallengeParticipant,
}

/// Progress update request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProgressRequest {
    /// Explicit progress value; omitted means increment by one
    pub progress: Option<i64>,
}

/// Challenge routes handler
pub struct ChallengeRoutes;

impl ChallengeRoutes {
    /// Create all challenge routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/challenges", get(Self::handle_list))
            .route("/api/challenges/:id/join", post(Self::handle_join))
            .route("/api/challenges/:id/progress", put(Self::handle_progress))
            .with_state(resources)
    }

    /// Handle GET /api/challenges - active challenges with participant counts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        resources.auth_manager.authenticate(&headers)?;

        let challenges = resources.database.list_active_challenges().await?;
        let mut summaries = Vec::with_capacity(challenges.len());
        for challenge in challenges {
            let participants = resources.database.count_participants(challenge.id).await?;
            summaries.push(ChallengeSummary {
                challenge,
                participants,
            });
        }

        let response = ChallengeListResponse {
            challenges: summaries,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/challenges/:id/join
    async fn handle_join(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(challenge_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let challenge = resources
            .database
            .get_challenge(challenge_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Challenge").with_resource_id(challenge_id.to_string())
            })?;

        if !challenge.is_active {
            return Err(AppError::invalid_input("Challenge is not active"));
        }

        let existing = resources
            .database
            .get_participant(challenge_id, auth.user_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::invalid_input(
                "Already participating in this challenge",
            ));
        }

        let participant = ChallengeParticipant::new(challenge_id, auth.user_id);
        resources.database.join_challenge(&participant).await?;
        info!("user {} joined challenge {challenge_id}", auth.user_id);

        Ok((StatusCode::CREATED, Json(ParticipantResponse { participant })).into_response())
    }

    /// Handle PUT /api/challenges/:id/progress
    ///
    /// An explicit progress value replaces the counter; an empty body
    /// increments it by one. Reaching the challenge duration completes the
    /// participant and grants the XP reward exactly once.
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(challenge_id): Path<Uuid>,
        Json(request): Json<UpdateProgressRequest>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let challenge = resources
            .database
            .get_challenge(challenge_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Challenge").with_resource_id(challenge_id.to_string())
            })?;

        let participant = resources
            .database
            .get_participant(challenge_id, auth.user_id)
            .await?
            .ok_or_else(|| AppError::invalid_input("Not participating in this challenge"))?;

        let new_progress = request.progress.unwrap_or(participant.progress + 1);
        if new_progress < 0 {
            return Err(AppError::invalid_input("Progress cannot be negative"));
        }

        let completing = !participant.completed && new_progress >= challenge.duration_days;
        if completing {
            let granted = resources
                .database
                .complete_participant(challenge_id, auth.user_id, new_progress)
                .await?;
            if granted {
                resources
                    .database
                    .increment_user_xp(auth.user_id, challenge.xp_reward)
                    .await?;
                info!(
                    "user {} completed challenge {challenge_id} for {} XP",
                    auth.user_id, challenge.xp_reward
                );
            }
        } else {
            resources
                .database
                .update_participant_progress(challenge_id, auth.user_id, new_progress)
                .await?;
        }

        let updated = resources
            .database
            .get_participant(challenge_id, auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Challenge participant"))?;

        Ok((
            StatusCode::OK,
            Json(ParticipantResponse {
                participant: updated,
            }),
        )
            .into_response())
    }
}
