use crate::wire::{CampaignRequest, ExtractedInfo};

fn persona() -> &'static str {
r#"Context: You're a marketing specialist, skilled at connecting YouTube creators and merchants. You excel at crafting marketing and ad campaigns to help merchants find the right creators for successful collaborations."#
}

fn budget_guidance(budget: &str) -> String {
    format!(
r#"BUDGET GUIDANCE:
The merchant's budget is {budget}. Based on this budget:
- For budgets under $5,000: Recommend micro-influencers (50K-200K subscribers)
- For budgets $5,000-$25,000: Recommend mid-tier creators (200K-1M subscribers)
- For budgets over $25,000: Recommend larger creators (1M+ subscribers)"#
    )
}

fn guidance() -> &'static str {
r#"IMPORTANT GUIDANCE:
1. Focus on creating a campaign that highlights the specific product features identified in the analysis
2. Group recommended creators by category/niche (e.g., Tech Reviewers, Beauty Influencers, Lifestyle Vloggers)
3. Include AT LEAST 5 creators for EACH category, and recommend at least 3-4 different categories relevant to the product
4. For each creator, include realistic subscriber counts and average view counts that align with the campaign budget
5. Suggest video concepts that utilize the content styles most appropriate for this product
6. Include specific ways to measure campaign success based on the product type and campaign goals"#
}

fn plan_shape() -> &'static str {
r#"IMPORTANT: You MUST format your response as valid JSON with the following structure exactly:
{
  "campaignName": "Create a catchy campaign name based on the product",
  "videoIdeas": ["Video idea 1", "Video idea 2", "Video idea 3", "Video idea 4", "Video idea 5"],
  "trackingMetrics": ["Tracking metric 1", "Tracking metric 2", "Tracking metric 3", "Tracking metric 4", "Tracking metric 5"],
  "keysToSuccess": ["Key to success 1", "Key to success 2", "Key to success 3", "Key to success 4", "Key to success 5"],
  "creatorCategories": [
    {
      "categoryName": "Category 1 (e.g., Tech Reviewers)",
      "creators": [
        {
          "name": "Creator name 1",
          "description": "Detailed description about why this creator is a good fit",
          "channelUrl": "YouTube channel URL",
          "subscribers": "1.2M subscribers",
          "averageViews": "150K views",
          "budgetFit": "High Budget Fit"
        }
      ]
    }
  ]
}
Include at least 5 creators per category and 3-4 categories, each with the same structure."#
}

fn style() -> &'static str {
r#"Style and Tone:
- Use clear, concise language with everyday words and short sentences
- Aim for a 9th-grade reading level, keeping it simple yet engaging
- Be a friendly and professional campaign expert
- Express confidence in the merchant's ability to create a successful campaign

Ensure all recommendations are relevant to the information provided. If product analysis is provided, use the key features to inform your video ideas and creator recommendations.

Remember: Your entire response must be valid JSON following the exact structure above, with no additional text before or after."#
}

fn joined_or_na(items: &[String]) -> String {
    if items.is_empty() {
        "N/A".to_string()
    } else {
        items.join(", ")
    }
}

fn analysis_block(info: &ExtractedInfo) -> String {
    let creators = if info.recommended_creators.is_empty() {
        "No specific creators recommended from analysis".to_string()
    } else {
        info.recommended_creators
            .iter()
            .map(|c| format!("- {} ({}): {}", c.name, c.subscribers, c.description))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "Product Analysis:\n\
- Category: {}\n\
- Price Range: {}\n\
- Target Audience: {}\n\
- Key Features: {}\n\n\
Suggested Creator Guidance:\n\
- Recommended Creator Types: {}\n\
- Suggested Content Styles: {}\n\n\
Recommended YouTube Creators from Analysis:\n{}",
        info.category,
        info.estimated_price,
        info.target_demographic,
        joined_or_na(&info.key_features),
        joined_or_na(&info.recommended_creator_types),
        joined_or_na(&info.suggested_content_styles),
        creators,
    )
}

/// Full campaign-plan instruction for one request.
pub fn campaign_prompt(req: &CampaignRequest) -> String {
    let info = req.product_analysis.as_ref().map(|a| &a.extracted_info);
    let target_audience = req
        .target_audience
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| info.map(|i| i.target_demographic.as_str()))
        .unwrap_or("Not specified");
    let creator_details = req
        .creator_details
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("Not specified");
    let product_url = req
        .product_info
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("Not provided");

    let mut out = String::new();
    out.push_str(persona());
    out.push_str("\n\nObjective: Provide personalized recommendations to guide merchants in building marketing and ad campaigns with YouTube creators from scratch.\n\n");
    if info.is_some() {
        out.push_str("The merchant provided a product URL for analysis and then the campaign details below. Use BOTH the product analysis and the campaign goals to tailor the plan.\n\n");
    }
    out.push_str("Create a structured YouTube creator marketing campaign plan based on the following details:\n\n");
    out.push_str(&format!(
        "Campaign Goals: {}\nTarget Audience: {}\nCreator Details: {}\nCampaign Budget: {}\nTimeline: {}\nProduct URL: {}\n",
        req.campaign_goals, target_audience, creator_details, req.campaign_budget, req.timeline, product_url
    ));
    if let Some(info) = info {
        out.push('\n');
        out.push_str(&analysis_block(info));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&budget_guidance(&req.campaign_budget));
    out.push_str("\n\n");
    out.push_str(guidance());
    out.push_str("\n\n");
    out.push_str(plan_shape());
    out.push_str("\n\n");
    out.push_str(style());
    out
}

/// Instruction asking the model to analyse the product behind `url`.
pub fn product_analysis_prompt(url: &str) -> String {
    format!(
r#"{persona}

Objective: Analyze this product at URL: {url}

FORMAT YOUR RESPONSE AS VALID JSON with the following structure:
{{
  "category": "Product category",
  "targetDemographic": "Target audience description",
  "priceRange": "Estimated price range",
  "keyFeatures": ["Feature 1", "Feature 2", "Feature 3", "Feature 4", "Feature 5"],
  "recommendedContentTypes": ["Content type 1", "Content type 2", "Content type 3"],
  "recommendedCreators": [
    {{
      "name": "Real creator name",
      "channelUrl": "Actual YouTube channel URL",
      "subscribers": "Approximate subscriber count",
      "description": "Why they're a good fit for this product"
    }}
  ]
}}

IMPORTANT NOTES:
- For recommendedCreators, suggest ACTUAL real YouTube creators who would be a good fit for this specific product (at least 3)
- Provide real YouTube channel URLs (like https://www.youtube.com/@CreatorName)
- Focus on identifying the unique selling points of this specific product
- Analyze the specific product at the URL provided, not just the product type in general

Remember to structure your entire response as valid JSON, nothing else."#,
        persona = persona(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::mock_product_analysis;

    fn request() -> CampaignRequest {
        CampaignRequest {
            campaign_goals: "Drive launch sales".into(),
            campaign_budget: "$5,000 - $10,000".into(),
            timeline: "4 weeks".into(),
            ..CampaignRequest::default()
        }
    }

    #[test]
    fn fills_placeholders() {
        let prompt = campaign_prompt(&request());
        assert!(prompt.contains("Campaign Goals: Drive launch sales"));
        assert!(prompt.contains("Target Audience: Not specified"));
        assert!(prompt.contains("Product URL: Not provided"));
        assert!(prompt.contains("The merchant's budget is $5,000 - $10,000."));
        assert!(prompt.contains("\"creatorCategories\""));
        assert!(!prompt.contains("Product Analysis:"));
    }

    #[test]
    fn embeds_analysis_and_uses_its_audience() {
        let mut req = request();
        req.product_info = Some("https://shop.example.com/beauty/serum".into());
        req.product_analysis = Some(mock_product_analysis("https://shop.example.com/beauty/serum"));
        let prompt = campaign_prompt(&req);
        assert!(prompt.contains("Product Analysis:\n- Category: beauty"));
        assert!(prompt.contains("Target Audience: Beauty enthusiasts, 18-35"));
        assert!(prompt.contains("No specific creators recommended from analysis"));
    }

    #[test]
    fn analysis_prompt_names_url() {
        let prompt = product_analysis_prompt("https://example.com/p/1");
        assert!(prompt.contains("Objective: Analyze this product at URL: https://example.com/p/1"));
        assert!(prompt.contains("\"keyFeatures\""));
    }
}
