// ABOUTME: SQLite storage for users, profiles, workouts, challenges, and progress
// ABOUTME: Parameterized CRUD plus the compare-and-swap gamification ledger write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! # Database Management
//!
//! Storage layer for the FitSphere backend. Dates are stored as RFC 3339
//! text, calendar dates as `YYYY-MM-DD` text, and identifiers as UUID text.
//! The gamification ledger write is a guarded UPDATE keyed on the previously
//! read last-workout date, so a lost race is reported instead of silently
//! overwriting a concurrent update.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use crate::intelligence::LedgerOutcome;
use crate::models::{
    Challenge, ChallengeParticipant, Exercise, Profile, ProgressEntry, User, Workout,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw, DATE_FORMAT)?)
}

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

/// Database manager for user, recommendation, and gamification storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error when the pool cannot connect or migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // An in-memory database exists per connection; a single connection
        // keeps every query on the same database
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&connection_options)
                .await?
        } else {
            SqlitePoolOptions::new().connect(&connection_options).await?
        };

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error when a schema statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                display_name TEXT,
                password_hash TEXT NOT NULL,
                xp INTEGER NOT NULL DEFAULT 0,
                streak INTEGER NOT NULL DEFAULT 0,
                last_workout_date TEXT,
                badges TEXT NOT NULL DEFAULT '[]',
                is_active BOOLEAN NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id TEXT PRIMARY KEY,
                age INTEGER,
                height_cm REAL,
                weight_kg REAL,
                gender TEXT NOT NULL DEFAULT 'prefer-not-to-say',
                fitness_goal TEXT NOT NULL DEFAULT 'general-fitness',
                daily_workout_minutes INTEGER NOT NULL DEFAULT 30,
                equipment TEXT NOT NULL DEFAULT '["bodyweight"]',
                food_preference TEXT NOT NULL DEFAULT 'no-preference',
                fitness_level TEXT NOT NULL DEFAULT 'beginner',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                exercises TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                calories_burned INTEGER NOT NULL DEFAULT 0,
                venue TEXT NOT NULL DEFAULT 'home',
                difficulty TEXT NOT NULL DEFAULT 'beginner',
                completed BOOLEAN NOT NULL DEFAULT 0,
                completed_at TEXT,
                created_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user_id ON workouts(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_created_at ON workouts(created_at)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS challenges (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                challenge_type TEXT NOT NULL,
                duration_days INTEGER NOT NULL,
                xp_reward INTEGER NOT NULL DEFAULT 100,
                start_date TEXT NOT NULL,
                end_date TEXT,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS challenge_participants (
                challenge_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                progress INTEGER NOT NULL DEFAULT 0,
                completed BOOLEAN NOT NULL DEFAULT 0,
                joined_at TEXT NOT NULL,
                PRIMARY KEY (challenge_id, user_id),
                FOREIGN KEY (challenge_id) REFERENCES challenges (id) ON DELETE CASCADE,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS progress_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                weight_kg REAL,
                body_fat_pct REAL,
                muscle_mass_kg REAL,
                measurements TEXT NOT NULL DEFAULT '{}',
                notes TEXT,
                recorded_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_progress_entries_user_id ON progress_entries(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ================================
    // Users
    // ================================

    /// Create a new user account
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails, including on duplicate email.
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, display_name, password_hash, xp, streak,
                               last_workout_date, badges, is_active, created_at, last_active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(user.xp)
        .bind(user.streak)
        .bind(user.last_workout_date.map(format_date))
        .bind(serde_json::to_string(&user.badges)?)
        .bind(user.is_active)
        .bind(user.created_at.to_rfc3339())
        .bind(user.last_active.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Update a user's last active timestamp
    ///
    /// # Errors
    ///
    /// Returns an error when the update fails.
    pub async fn update_last_active(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET last_active = ?1 WHERE id = ?2")
            .bind(Utc::now().to_rfc3339())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Get total number of users
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    pub async fn get_user_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Atomically add XP to a user (challenge rewards)
    ///
    /// # Errors
    ///
    /// Returns an error when the update fails.
    pub async fn increment_user_xp(&self, user_id: Uuid, amount: i64) -> Result<()> {
        sqlx::query("UPDATE users SET xp = xp + ?1, last_active = ?2 WHERE id = ?3")
            .bind(amount)
            .bind(Utc::now().to_rfc3339())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Commit a workout-completion ledger outcome with a compare-and-swap
    ///
    /// The write only applies while the user's `last_workout_date` still
    /// matches the value the outcome was computed from. Returns `false`
    /// when a concurrent completion got there first; the caller re-reads
    /// and recomputes.
    ///
    /// # Errors
    ///
    /// Returns an error when the update itself fails.
    pub async fn commit_workout_ledger(
        &self,
        user_id: Uuid,
        expected_last_workout_date: Option<NaiveDate>,
        outcome: &LedgerOutcome,
    ) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET xp = ?1, streak = ?2, last_workout_date = ?3, badges = ?4, last_active = ?5
            WHERE id = ?6 AND last_workout_date IS ?7
            ",
        )
        .bind(outcome.new_xp)
        .bind(outcome.new_streak)
        .bind(format_date(outcome.new_last_workout_date))
        .bind(serde_json::to_string(&outcome.new_badges)?)
        .bind(Utc::now().to_rfc3339())
        .bind(user_id.to_string())
        .bind(expected_last_workout_date.map(format_date))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Profiles
    // ================================

    /// Create or update the profile for a user
    ///
    /// # Errors
    ///
    /// Returns an error when the upsert fails.
    pub async fn upsert_profile(&self, profile: &Profile) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (user_id, age, height_cm, weight_kg, gender, fitness_goal,
                                  daily_workout_minutes, equipment, food_preference,
                                  fitness_level, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            ON CONFLICT(user_id) DO UPDATE SET
                age = excluded.age,
                height_cm = excluded.height_cm,
                weight_kg = excluded.weight_kg,
                gender = excluded.gender,
                fitness_goal = excluded.fitness_goal,
                daily_workout_minutes = excluded.daily_workout_minutes,
                equipment = excluded.equipment,
                food_preference = excluded.food_preference,
                fitness_level = excluded.fitness_level,
                updated_at = excluded.updated_at
            ",
        )
        .bind(profile.user_id.to_string())
        .bind(profile.age)
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(profile.gender.as_str())
        .bind(profile.fitness_goal.as_str())
        .bind(profile.daily_workout_minutes)
        .bind(serde_json::to_string(&profile.equipment)?)
        .bind(profile.food_preference.as_str())
        .bind(profile.fitness_level.as_str())
        .bind(profile.created_at.to_rfc3339())
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get the profile for a user
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let row = sqlx::query("SELECT * FROM profiles WHERE user_id = ?1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    // ================================
    // Workouts
    // ================================

    /// Persist a generated workout
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails.
    pub async fn create_workout(&self, workout: &Workout) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO workouts (id, user_id, title, exercises, duration_minutes,
                                  calories_burned, venue, difficulty, completed,
                                  completed_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ",
        )
        .bind(workout.id.to_string())
        .bind(workout.user_id.to_string())
        .bind(&workout.title)
        .bind(serde_json::to_string(&workout.exercises)?)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned)
        .bind(workout.venue.as_str())
        .bind(workout.difficulty.as_str())
        .bind(workout.completed)
        .bind(workout.completed_at.map(|dt| dt.to_rfc3339()))
        .bind(workout.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get one workout owned by a user
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_workout(&self, user_id: Uuid, workout_id: Uuid) -> Result<Option<Workout>> {
        let row = sqlx::query("SELECT * FROM workouts WHERE id = ?1 AND user_id = ?2")
            .bind(workout_id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_workout(&row)?)),
            None => Ok(None),
        }
    }

    /// Get a user's workouts, newest first
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_user_workouts(&self, user_id: Uuid, limit: i64) -> Result<Vec<Workout>> {
        let rows = sqlx::query(
            "SELECT * FROM workouts WHERE user_id = ?1 ORDER BY created_at DESC LIMIT ?2",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_workout).collect()
    }

    /// Transition a workout from incomplete to complete, exactly once
    ///
    /// Returns `false` when the workout does not exist for this user or was
    /// already completed.
    ///
    /// # Errors
    ///
    /// Returns an error when the update fails.
    pub async fn mark_workout_completed(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE workouts SET completed = 1, completed_at = ?1
            WHERE id = ?2 AND user_id = ?3 AND completed = 0
            ",
        )
        .bind(completed_at.to_rfc3339())
        .bind(workout_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Challenges
    // ================================

    /// Create a challenge
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails.
    pub async fn create_challenge(&self, challenge: &Challenge) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO challenges (id, title, description, challenge_type, duration_days,
                                    xp_reward, start_date, end_date, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ",
        )
        .bind(challenge.id.to_string())
        .bind(&challenge.title)
        .bind(&challenge.description)
        .bind(&challenge.challenge_type)
        .bind(challenge.duration_days)
        .bind(challenge.xp_reward)
        .bind(challenge.start_date.to_rfc3339())
        .bind(challenge.end_date.map(|dt| dt.to_rfc3339()))
        .bind(challenge.is_active)
        .bind(challenge.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a challenge by ID
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_challenge(&self, challenge_id: Uuid) -> Result<Option<Challenge>> {
        let row = sqlx::query("SELECT * FROM challenges WHERE id = ?1")
            .bind(challenge_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_challenge(&row)?)),
            None => Ok(None),
        }
    }

    /// List active challenges, newest first
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn list_active_challenges(&self) -> Result<Vec<Challenge>> {
        let rows = sqlx::query("SELECT * FROM challenges WHERE is_active = 1 ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_challenge).collect()
    }

    /// Count participants of a challenge
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    pub async fn count_participants(&self, challenge_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM challenge_participants WHERE challenge_id = ?1",
        )
        .bind(challenge_id.to_string())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Get one participant record
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChallengeParticipant>> {
        let row = sqlx::query(
            "SELECT * FROM challenge_participants WHERE challenge_id = ?1 AND user_id = ?2",
        )
        .bind(challenge_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_participant(&row)?)),
            None => Ok(None),
        }
    }

    /// Add a participant to a challenge
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails, including when the user
    /// already participates.
    pub async fn join_challenge(&self, participant: &ChallengeParticipant) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO challenge_participants (challenge_id, user_id, progress, completed, joined_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(participant.challenge_id.to_string())
        .bind(participant.user_id.to_string())
        .bind(participant.progress)
        .bind(participant.completed)
        .bind(participant.joined_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a participant's progress counter
    ///
    /// # Errors
    ///
    /// Returns an error when the update fails.
    pub async fn update_participant_progress(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE challenge_participants SET progress = ?1 WHERE challenge_id = ?2 AND user_id = ?3",
        )
        .bind(progress)
        .bind(challenge_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Mark a participant completed, exactly once
    ///
    /// Returns `false` when the participant was already completed, so the
    /// XP reward is granted at most once.
    ///
    /// # Errors
    ///
    /// Returns an error when the update fails.
    pub async fn complete_participant(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        progress: i64,
    ) -> Result<bool> {
        let result = sqlx::query(
            r"
            UPDATE challenge_participants SET progress = ?1, completed = 1
            WHERE challenge_id = ?2 AND user_id = ?3 AND completed = 0
            ",
        )
        .bind(progress)
        .bind(challenge_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // ================================
    // Progress Entries
    // ================================

    /// Record a progress entry
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails.
    pub async fn create_progress_entry(&self, entry: &ProgressEntry) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO progress_entries (id, user_id, weight_kg, body_fat_pct, muscle_mass_kg,
                                          measurements, notes, recorded_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(entry.weight_kg)
        .bind(entry.body_fat_pct)
        .bind(entry.muscle_mass_kg)
        .bind(serde_json::to_string(&entry.measurements)?)
        .bind(&entry.notes)
        .bind(entry.recorded_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get a user's progress entries, newest first
    ///
    /// # Errors
    ///
    /// Returns an error when the query or row decoding fails.
    pub async fn get_progress_entries(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ProgressEntry>> {
        let rows = sqlx::query(
            "SELECT * FROM progress_entries WHERE user_id = ?1 ORDER BY recorded_at DESC LIMIT ?2",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_progress_entry).collect()
    }

    // ================================
    // Row Mapping
    // ================================

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
        let badges: Vec<String> = serde_json::from_str(&row.try_get::<String, _>("badges")?)?;
        let last_workout_date = row
            .try_get::<Option<String>, _>("last_workout_date")?
            .map(|raw| parse_date(&raw))
            .transpose()?;

        Ok(User {
            id: Uuid::parse_str(&row.try_get::<String, _>("id")?)?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            password_hash: row.try_get("password_hash")?,
            xp: row.try_get("xp")?,
            streak: row.try_get("streak")?,
            last_workout_date,
            badges,
            is_active: row.try_get("is_active")?,
            created_at: parse_datetime(&row.try_get::<String, _>("created_at")?)?,
            last_active: parse_datetime(&row.try_get::<String, _>("last_active")?)?,
        })
    }

    fn row_to_profile(row: &sqlx::sqlite::SqliteRow) -> Result<Profile> {
        let equipment: Vec<String> = serde_json::from_str(&row.try_get::<String, _>("equipment")?)?;

        Ok(Profile {
            user_id: Uuid::parse_str(&row.try_get::<String, _>("user_id")?)?,
            age: row.try_get("age")?,
            height_cm: row.try_get("height_cm")?,
            weight_kg: row.try_get("weight_kg")?,
            gender: row.try_get::<String, _>("gender")?.parse()?,
            fitness_goal: row.try_get::<String, _>("fitness_goal")?.parse()?,
            daily_workout_minutes: row.try_get("daily_workout_minutes")?,
            equipment,
            food_preference: row.try_get::<String, _>("food_preference")?.parse()?,
            fitness_level: row.try_get::<String, _>("fitness_level")?.parse()?,
            created_at: parse_datetime(&row.try_get::<String, _>("created_at")?)?,
            updated_at: parse_datetime(&row.try_get::<String, _>("updated_at")?)?,
        })
    }

    fn row_to_workout(row: &sqlx::sqlite::SqliteRow) -> Result<Workout> {
        let exercises: Vec<Exercise> =
            serde_json::from_str(&row.try_get::<String, _>("exercises")?)?;
        let completed_at = row
            .try_get::<Option<String>, _>("completed_at")?
            .map(|raw| parse_datetime(&raw))
            .transpose()?;

        Ok(Workout {
            id: Uuid::parse_str(&row.try_get::<String, _>("id")?)?,
            user_id: Uuid::parse_str(&row.try_get::<String, _>("user_id")?)?,
            title: row.try_get("title")?,
            exercises,
            duration_minutes: row.try_get("duration_minutes")?,
            calories_burned: row.try_get("calories_burned")?,
            venue: row.try_get::<String, _>("venue")?.parse()?,
            difficulty: row.try_get::<String, _>("difficulty")?.parse()?,
            completed: row.try_get("completed")?,
            completed_at,
            created_at: parse_datetime(&row.try_get::<String, _>("created_at")?)?,
        })
    }

    fn row_to_challenge(row: &sqlx::sqlite::SqliteRow) -> Result<Challenge> {
        let end_date = row
            .try_get::<Option<String>, _>("end_date")?
            .map(|raw| parse_datetime(&raw))
            .transpose()?;

        Ok(Challenge {
            id: Uuid::parse_str(&row.try_get::<String, _>("id")?)?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            challenge_type: row.try_get("challenge_type")?,
            duration_days: row.try_get("duration_days")?,
            xp_reward: row.try_get("xp_reward")?,
            start_date: parse_datetime(&row.try_get::<String, _>("start_date")?)?,
            end_date,
            is_active: row.try_get("is_active")?,
            created_at: parse_datetime(&row.try_get::<String, _>("created_at")?)?,
        })
    }

    fn row_to_participant(row: &sqlx::sqlite::SqliteRow) -> Result<ChallengeParticipant> {
        Ok(ChallengeParticipant {
            challenge_id: Uuid::parse_str(&row.try_get::<String, _>("challenge_id")?)?,
            user_id: Uuid::parse_str(&row.try_get::<String, _>("user_id")?)?,
            progress: row.try_get("progress")?,
            completed: row.try_get("completed")?,
            joined_at: parse_datetime(&row.try_get::<String, _>("joined_at")?)?,
        })
    }

    fn row_to_progress_entry(row: &sqlx::sqlite::SqliteRow) -> Result<ProgressEntry> {
        let measurements: serde_json::Value =
            serde_json::from_str(&row.try_get::<String, _>("measurements")?)?;

        Ok(ProgressEntry {
            id: Uuid::parse_str(&row.try_get::<String, _>("id")?)?,
            user_id: Uuid::parse_str(&row.try_get::<String, _>("user_id")?)?,
            weight_kg: row.try_get("weight_kg")?,
            body_fat_pct: row.try_get("body_fat_pct")?,
            muscle_mass_kg: row.try_get("muscle_mass_kg")?,
            measurements,
            notes: row.try_get("notes")?,
            recorded_at: parse_datetime(&row.try_get::<String, _>("recorded_at")?)?,
        })
    }
}
