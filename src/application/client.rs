/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::job::JobService;
use crate::application::interfaces::key::KeyService;
use crate::application::interfaces::minion::MinionService;
use crate::client::Client;
use crate::constants::{JOBS_ENDPOINT, KEYS_ENDPOINT, MINIONS_ENDPOINT};
use crate::error::AppError;
use crate::model::requests::JobRequest;
use crate::model::responses::{
    AsyncJob, Job, JobDetails, JobLookupResponse, KeyLists, KeysResponse, Minion, SaltResponse,
};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info};

fn require_non_empty(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{name} must not be empty")));
    }
    Ok(())
}

#[async_trait]
impl MinionService for Client {
    async fn minion(&self, id: &str) -> Result<Option<Minion>, AppError> {
        require_non_empty("minion id", id)?;
        let path = format!("{MINIONS_ENDPOINT}/{id}");
        debug!("Getting minion: {}", id);

        let response: SaltResponse<Map<String, Value>> = self.get(&path).await?;
        let minion = response
            .into_first()
            .and_then(|mut entries| entries.remove(id))
            .and_then(|grains| Minion::from_entry(id, grains));

        if minion.is_none() {
            info!("Minion {} did not return grains", id);
        }
        Ok(minion)
    }

    async fn minions(&self) -> Result<Vec<Minion>, AppError> {
        let response: SaltResponse<Map<String, Value>> = self.get(MINIONS_ENDPOINT).await?;

        let mut minions: Vec<Minion> = response
            .into_first()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(id, grains)| Minion::from_entry(&id, grains))
            .collect();
        minions.sort_by(|a, b| a.id.cmp(&b.id));

        debug!("Minions obtained: {}", minions.len());
        Ok(minions)
    }

    async fn submit_job(&self, job: &JobRequest) -> Result<AsyncJob, AppError> {
        info!("Submitting {} to {}", job.fun, job.tgt);
        let response: SaltResponse<AsyncJob> = self.post(MINIONS_ENDPOINT, job).await?;

        let submitted = response.into_first().unwrap_or_default();
        if submitted.jid.is_empty() {
            return Err(AppError::NoMinionsMatched(job.tgt.clone()));
        }
        debug!(
            "Job {} published to {} minion(s)",
            submitted.jid,
            submitted.minions.len()
        );
        Ok(submitted)
    }
}

#[async_trait]
impl JobService for Client {
    async fn jobs(&self) -> Result<Vec<Job>, AppError> {
        let response: SaltResponse<Map<String, Value>> = self.get(JOBS_ENDPOINT).await?;

        let mut jobs = Vec::new();
        for (jid, value) in response.into_first().unwrap_or_default() {
            let mut job: Job = serde_json::from_value(value)?;
            job.jid = jid;
            jobs.push(job);
        }
        jobs.sort_by(|a, b| a.jid.cmp(&b.jid));

        debug!("Jobs obtained: {}", jobs.len());
        Ok(jobs)
    }

    async fn job(&self, jid: &str) -> Result<JobDetails, AppError> {
        require_non_empty("jid", jid)?;
        let path = format!("{JOBS_ENDPOINT}/{jid}");
        debug!("Getting job: {}", jid);

        let response: JobLookupResponse = self.get(&path).await?;
        Ok(JobDetails::from(response))
    }
}

#[async_trait]
impl KeyService for Client {
    async fn keys(&self) -> Result<KeyLists, AppError> {
        let response: KeysResponse = self.get(KEYS_ENDPOINT).await?;
        debug!(
            "Keys obtained: {} accepted, {} pending",
            response.keys.minions.len(),
            response.keys.minions_pre.len()
        );
        Ok(response.keys)
    }
}
